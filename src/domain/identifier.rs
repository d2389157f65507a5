use super::Error;
use std::{fmt, str::FromStr};

pub const SEPARATOR: char = '-';

const TRANSITION_FORMAT: &str = "workflow_template_id-transition_id";
const TRIGGER_FORMAT: &str = "workflow_template_id-transition_id-trigger_id";

/// Splits a composite identifier into exactly `N` integer coordinates.
fn split<const N: usize>(id: &str, expected: &'static str) -> Result<[i64; N], Error> {
    let parts = id.split(SEPARATOR).collect::<Vec<_>>();
    if parts.len() != N {
        return Err(Error::invalid_identifier(id, expected));
    }

    let mut coordinates = [0; N];
    for (coordinate, part) in coordinates.iter_mut().zip(parts) {
        *coordinate = part
            .parse()
            .map_err(|_| Error::invalid_identifier(id, expected))?;
    }

    Ok(coordinates)
}

/// Identity of a transition inside a workflow template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId {
    workflow_template: i64,
    transition: i64,
}

impl TransitionId {
    pub fn new(workflow_template: i64, transition: i64) -> Self {
        Self {
            workflow_template,
            transition,
        }
    }

    pub fn workflow_template(&self) -> i64 {
        self.workflow_template
    }

    pub fn transition(&self) -> i64 {
        self.transition
    }
}

impl FromStr for TransitionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [workflow_template, transition] = split::<2>(s, TRANSITION_FORMAT)?;
        Ok(Self::new(workflow_template, transition))
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.workflow_template, self.transition)
    }
}

/// Identity of a trigger, the string the host tracks the resource under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId {
    workflow_template: i64,
    transition: i64,
    trigger: i64,
}

impl TriggerId {
    pub fn new(workflow_template: i64, transition: i64, trigger: i64) -> Self {
        Self {
            workflow_template,
            transition,
            trigger,
        }
    }

    pub fn workflow_template(&self) -> i64 {
        self.workflow_template
    }

    pub fn transition(&self) -> i64 {
        self.transition
    }

    pub fn trigger(&self) -> i64 {
        self.trigger
    }

    pub fn transition_id(&self) -> TransitionId {
        TransitionId::new(self.workflow_template, self.transition)
    }
}

impl FromStr for TriggerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [workflow_template, transition, trigger] = split::<3>(s, TRIGGER_FORMAT)?;
        Ok(Self::new(workflow_template, transition, trigger))
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.workflow_template, self.transition, self.trigger
        )
    }
}
