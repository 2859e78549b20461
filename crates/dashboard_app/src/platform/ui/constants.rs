/// Stable identifier of a control on the dashboard surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(u16);

impl ControlId {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }
}

pub const SELECT_MODE: ControlId = ControlId::new(1001);
pub const INPUT_KEYWORD: ControlId = ControlId::new(1002);
pub const BUTTON_START: ControlId = ControlId::new(1003);
pub const BUTTON_STOP: ControlId = ControlId::new(1004);
pub const BUTTON_SAVE_FAVORITE: ControlId = ControlId::new(1005);
pub const LABEL_STATUS: ControlId = ControlId::new(3001);
pub const LABEL_COUNT: ControlId = ControlId::new(3002);
pub const CONTAINER_FAVORITES: ControlId = ControlId::new(4001);
