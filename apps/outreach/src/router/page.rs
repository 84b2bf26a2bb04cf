use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every page the demo can show. The router is always in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    DemoSetup,
    Onboarding,
    OnboardingStep2,
    GoalSelection,
    Segments,
    Recipe1,
    RecipeLoader,
    Recipe2,
    Chat,
    OutreachContract,
}

/// The scripted walk-through order. `Chat` is a side trip from the preview.
const FLOW: [Page; 9] = [
    Page::DemoSetup,
    Page::Onboarding,
    Page::OnboardingStep2,
    Page::GoalSelection,
    Page::Segments,
    Page::Recipe1,
    Page::RecipeLoader,
    Page::Recipe2,
    Page::OutreachContract,
];

impl Page {
    pub const ALL: [Page; 10] = [
        Page::DemoSetup,
        Page::Onboarding,
        Page::OnboardingStep2,
        Page::GoalSelection,
        Page::Segments,
        Page::Recipe1,
        Page::RecipeLoader,
        Page::Recipe2,
        Page::Chat,
        Page::OutreachContract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::DemoSetup => "demo-setup",
            Page::Onboarding => "onboarding",
            Page::OnboardingStep2 => "onboarding-step2",
            Page::GoalSelection => "goal-selection",
            Page::Segments => "segments",
            Page::Recipe1 => "recipe1",
            Page::RecipeLoader => "recipe-loader",
            Page::Recipe2 => "recipe2",
            Page::Chat => "chat",
            Page::OutreachContract => "outreach-contract",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::DemoSetup => "Demo setup",
            Page::Onboarding | Page::OnboardingStep2 => "Onboarding",
            Page::GoalSelection => "Choose a goal",
            Page::Segments => "Segments",
            Page::Recipe1 => "Recipe",
            Page::RecipeLoader => "Preparing your recipe",
            Page::Recipe2 => "Recipe review",
            Page::Chat => "Chat with Cleo",
            Page::OutreachContract => "Outreach contract",
        }
    }

    /// Next page in the scripted flow, if any.
    pub fn next(&self) -> Option<Page> {
        let index = FLOW.iter().position(|p| p == self)?;
        FLOW.get(index + 1).copied()
    }

    /// Previous page in the scripted flow. The chat page returns to the preview.
    pub fn previous(&self) -> Option<Page> {
        if *self == Page::Chat {
            return Some(Page::OutreachContract);
        }
        let index = FLOW.iter().position(|p| p == self)?;
        index.checked_sub(1).map(|i| FLOW[i])
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

/// Presentation hint attached to every navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}
