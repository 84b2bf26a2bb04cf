/// One explanatory card in the right column of the outreach preview.
///
/// `description` is trusted markup (it carries `<strong>` emphasis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractCard {
    pub title: &'static str,
    /// Material icon name.
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CONTRACT_CARDS: [ContractCard; 5] = [
    ContractCard {
        title: "Personal",
        icon: "auto_awesome",
        description: "Recognize career milestones and work anniversaries to create authentic, <strong>personal connections</strong>.",
    },
    ContractCard {
        title: "Audience",
        icon: "sports_score",
        description: "Nurture your <strong>entire talent network</strong> to grow a long-term candidate pipeline.",
    },
    ContractCard {
        title: "Cadence",
        icon: "email",
        description: "Reach out at least every <strong>3 months</strong> with content from your blog and new openings in your ATS.",
    },
    ContractCard {
        title: "Updates",
        icon: "schedule",
        description: "Get a <strong>weekly progress report every Monday</strong> with response rates and engagement highlights.",
    },
    ContractCard {
        title: "Control",
        icon: "handshake",
        description: "Respect your <strong>no-contact list</strong> and confirm changes with you before updating the approach.",
    },
];
