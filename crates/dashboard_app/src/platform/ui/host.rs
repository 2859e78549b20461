use std::collections::BTreeMap;

use dashboard_core::Notification;

use super::constants::ControlId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    SetControlText { control_id: ControlId, text: String },
    SetControlEnabled { control_id: ControlId, enabled: bool },
    /// Drop every child of the control and insert `nodes` in order.
    ReplaceChildren {
        control_id: ControlId,
        nodes: Vec<PanelNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelNode {
    Placeholder { text: String },
    Card { title: String, link: Link },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
    /// Open in a new browsing context rather than replacing the panel.
    pub new_context: bool,
}

/// The surface a [`Dashboard`](crate::platform::app::Dashboard) renders into.
pub trait PanelHost {
    fn execute(&mut self, command: PanelCommand);

    /// Called once after each batch of commands.
    fn flush(&mut self) {}

    /// Non-blocking notification; the user must get to see `text`.
    fn notify(&mut self, notification: &Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub text: String,
    pub enabled: bool,
    pub children: Vec<PanelNode>,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
            children: Vec::new(),
        }
    }
}

/// In-memory panel: keeps the current content of every control it was told
/// about, plus every notification in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: BTreeMap<ControlId, Region>,
    notifications: Vec<Notification>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, control_id: ControlId) -> Option<&Region> {
        self.regions.get(&control_id)
    }

    pub fn text(&self, control_id: ControlId) -> &str {
        self.region(control_id)
            .map(|region| region.text.as_str())
            .unwrap_or("")
    }

    pub fn is_enabled(&self, control_id: ControlId) -> bool {
        self.region(control_id).map_or(true, |region| region.enabled)
    }

    pub fn children(&self, control_id: ControlId) -> &[PanelNode] {
        self.region(control_id)
            .map(|region| region.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn region_mut(&mut self, control_id: ControlId) -> &mut Region {
        self.regions.entry(control_id).or_default()
    }
}

impl PanelHost for RegionStore {
    fn execute(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::SetControlText { control_id, text } => {
                self.region_mut(control_id).text = text;
            }
            PanelCommand::SetControlEnabled {
                control_id,
                enabled,
            } => {
                self.region_mut(control_id).enabled = enabled;
            }
            PanelCommand::ReplaceChildren { control_id, nodes } => {
                self.region_mut(control_id).children = nodes;
            }
        }
    }

    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}
