use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    List,
    Find,
    UpdateAverage,
    SetActive,
    ListActive,
    OverallAverage,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 8] = [
        MenuOption::Add,
        MenuOption::List,
        MenuOption::Find,
        MenuOption::UpdateAverage,
        MenuOption::SetActive,
        MenuOption::ListActive,
        MenuOption::OverallAverage,
        MenuOption::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuOption::Add => 1,
            MenuOption::List => 2,
            MenuOption::Find => 3,
            MenuOption::UpdateAverage => 4,
            MenuOption::SetActive => 5,
            MenuOption::ListActive => 6,
            MenuOption::OverallAverage => 7,
            MenuOption::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Add => "Add student",
            MenuOption::List => "List all students",
            MenuOption::Find => "Find by ID",
            MenuOption::UpdateAverage => "Update average",
            MenuOption::SetActive => "Change status",
            MenuOption::ListActive => "List active students",
            MenuOption::OverallAverage => "Show overall average",
            MenuOption::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOption(pub String);

impl FromStr for MenuOption {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|n| MenuOption::ALL.into_iter().find(|o| o.number() == n))
            .ok_or_else(|| InvalidOption(trimmed.to_string()))
    }
}
