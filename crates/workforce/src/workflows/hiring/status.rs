use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// Lifecycle state of a hiring record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    ApplicationReceived,
    InterviewScheduled,
    Hired,
    NotAccepted,
}

impl EmployeeStatus {
    /// Status assigned to a freshly created employee record.
    pub const INITIAL: Self = Self::ApplicationReceived;

    pub const fn ordered() -> [Self; 4] {
        [
            Self::ApplicationReceived,
            Self::InterviewScheduled,
            Self::Hired,
            Self::NotAccepted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ApplicationReceived => "Application Received",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Hired => "Hired",
            Self::NotAccepted => "Not Accepted",
        }
    }

    /// String used by the directory API for this status.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::ApplicationReceived => "application_received",
            Self::InterviewScheduled => "interview_scheduled",
            Self::Hired => "hired",
            Self::NotAccepted => "not_accepted",
        }
    }

    pub const fn valid_transitions(self) -> StatusSet {
        TRANSITIONS[self.index()]
    }

    pub const fn can_transition_to(self, to: Self) -> bool {
        self.valid_transitions().contains(to)
    }

    /// Terminal statuses have no outgoing edge to a different status.
    pub const fn is_terminal(self) -> bool {
        let outgoing = self.valid_transitions();
        outgoing.len() == 1 && outgoing.contains(self)
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when text from outside the process names no known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for EmployeeStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.wire_name() == needle)
            .ok_or_else(|| UnknownStatus(raw.to_string()))
    }
}

/// Small fixed set of statuses, one bit per variant.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusSet(u8);

impl StatusSet {
    pub const EMPTY: Self = Self(0);

    pub const fn with(self, status: EmployeeStatus) -> Self {
        Self(self.0 | status.bit())
    }

    pub const fn contains(self, status: EmployeeStatus) -> bool {
        self.0 & status.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = EmployeeStatus> {
        EmployeeStatus::ordered()
            .into_iter()
            .filter(move |status| self.contains(*status))
    }
}

impl fmt::Debug for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<EmployeeStatus> for StatusSet {
    fn from_iter<I: IntoIterator<Item = EmployeeStatus>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl Serialize for StatusSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for status in self.iter() {
            seq.serialize_element(&status)?;
        }
        seq.end()
    }
}

/// Outgoing edges of the hiring workflow, indexed by the source status.
pub const TRANSITIONS: [StatusSet; 4] = [
    // ApplicationReceived
    StatusSet::EMPTY
        .with(EmployeeStatus::InterviewScheduled)
        .with(EmployeeStatus::NotAccepted),
    // InterviewScheduled
    StatusSet::EMPTY
        .with(EmployeeStatus::Hired)
        .with(EmployeeStatus::NotAccepted),
    // Hired
    StatusSet::EMPTY.with(EmployeeStatus::Hired),
    // NotAccepted
    StatusSet::EMPTY.with(EmployeeStatus::NotAccepted),
];

pub const fn valid_transitions(from: EmployeeStatus) -> StatusSet {
    from.valid_transitions()
}

pub const fn is_valid_transition(from: EmployeeStatus, to: EmployeeStatus) -> bool {
    from.can_transition_to(to)
}

/// Refusal carrying the message shown to whoever attempted the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move from {from} to {to}")]
pub struct TransitionError {
    pub from: EmployeeStatus,
    pub to: EmployeeStatus,
}

pub fn ensure_transition(from: EmployeeStatus, to: EmployeeStatus) -> Result<(), TransitionError> {
    if is_valid_transition(from, to) {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}
