//! Panel view state

/// View state for the request panel
///
/// Pure data; the render-data provider turns it into `PanelData` and the
/// host's UI adapter does the drawing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    /// Whether the skill list is collapsed to its header
    pub collapsed: bool,
    /// Whether the configuration tab is active instead of the skill list
    pub show_config: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between the skill list and the configuration tab
    pub fn set_tab(&mut self, config: bool) {
        self.show_config = config;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}
