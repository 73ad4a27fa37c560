//! Literal copy for the landing page sections.

/// Founder signup route.
pub const SIGNUP_HREF: &str = "/signup";

/// Investor signup route.
pub const INVESTOR_SIGNUP_HREF: &str = "/signup?role=investor";

/// Path of the cheat sheet relative to the site root.
pub const CHEAT_SHEET_HREF: &str = "cheatsheet/index.html";

/// Icon + heading + body, shared by the about pillars and the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// One numbered step of "how it works".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct HeroCopy {
    pub badge: &'static str,
    pub headline: &'static str,
    pub accent: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    badge: "Now onboarding founders and angels",
    headline: "Where early-stage founders",
    accent: "meet the investors who get them.",
    description: "Seedline pairs pre-seed and seed startups with vetted investors, \
                  then gives both sides the playbook to close the round.",
    primary_cta: "Start as a Founder",
    secondary_cta: "Join as an Investor",
};

/// Mission, vision and values, in that order.
pub const ABOUT: &[Highlight] = &[
    Highlight {
        icon: "[M]",
        title: "Our Mission",
        body: "Make early-stage capital reachable for every founder with a real problem to solve, \
               not only the ones with a warm introduction.",
    },
    Highlight {
        icon: "[V]",
        title: "Our Vision",
        body: "A funding market where fit beats pedigree and both sides arrive at the first \
               meeting prepared.",
    },
    Highlight {
        icon: "[*]",
        title: "Our Values",
        body: "Transparency in every intro, respect for everyone's time, and advice we would \
               give our own friends.",
    },
];

pub const FEATURES: &[Highlight] = &[
    Highlight {
        icon: "[1]",
        title: "Curated Matching",
        body: "Investors see startups that fit their thesis, stage and check size. No cold spam.",
    },
    Highlight {
        icon: "[2]",
        title: "Founder Playbooks",
        body: "Cheat sheets on pitching, term sheets and metrics, written by operators who raised.",
    },
    Highlight {
        icon: "[3]",
        title: "Verified Profiles",
        body: "Every founder and investor is reviewed before they can request an introduction.",
    },
    Highlight {
        icon: "[4]",
        title: "Deal Room",
        body: "Share decks, metrics and diligence files in one place with per-investor access.",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Create your profile",
        body: "Tell us what you are building, how far along you are and what you are raising.",
    },
    ProcessStep {
        title: "Get matched",
        body: "We surface investors whose thesis and check size fit your round.",
    },
    ProcessStep {
        title: "Prepare with playbooks",
        body: "Tighten your deck and metrics with the founder cheat sheet before each meeting.",
    },
    ProcessStep {
        title: "Close the round",
        body: "Run diligence from the deal room and keep every investor updated in one place.",
    },
];

pub struct CallToActionCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub founder_label: &'static str,
    pub investor_label: &'static str,
}

pub const CALL_TO_ACTION: CallToActionCopy = CallToActionCopy {
    title: "Ready to raise smarter?",
    description: "Join the founders and investors already building their next round on Seedline.",
    founder_label: "Sign up as a Founder",
    investor_label: "Sign up as an Investor",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_routes_are_literal() {
        assert_eq!(SIGNUP_HREF, "/signup");
        assert_eq!(INVESTOR_SIGNUP_HREF, "/signup?role=investor");
    }

    #[test]
    fn about_lists_mission_vision_values() {
        let titles: Vec<_> = ABOUT.iter().map(|h| h.title).collect();
        assert_eq!(titles, ["Our Mission", "Our Vision", "Our Values"]);
    }
}
