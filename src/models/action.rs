/// Which side of a work shift a clock event marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Entry,
    Exit,
}

impl Action {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::Entry => "Entrada",
            Action::Exit => "Saída",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Entrada" => Some(Action::Entry),
            "Saída" => Some(Action::Exit),
            _ => None,
        }
    }

    /// Label shown next to the time in confirmations ("Hora de Entrada").
    pub fn label(&self) -> &'static str {
        self.to_db_str()
    }
}
