use std::fmt;

use super::{object, Argument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Closest,
    Merge,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupType::Closest => f.write_str("closest"),
            GroupType::Merge => f.write_str("merge"),
        }
    }
}

/// `group` argument collapsing similar results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    group_type: Option<GroupType>,
    force: Option<f32>,
}

impl Group {
    pub fn new(group_type: GroupType) -> Self {
        Self {
            group_type: Some(group_type),
            force: None,
        }
    }

    pub fn force(mut self, force: f32) -> Self {
        self.force = Some(force);
        self
    }
}

impl Argument for Group {
    fn build(&self) -> String {
        let mut parts = Vec::new();
        if let Some(group_type) = self.group_type {
            parts.push(format!("type:{}", group_type));
        }
        if let Some(force) = self.force {
            parts.push(format!("force:{}", force));
        }
        object("group", &parts)
    }
}
