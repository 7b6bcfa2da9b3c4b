pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const SCALE_STEP: f32 = 0.2;

/// Zoom and rotation handed to the inline viewer shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub scale: f32,
    /// Degrees, one of 0, 90, 180, 270.
    pub rotation: u16,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { scale: 1.2, rotation: 0 }
    }
}

impl ViewSettings {
    pub fn zoom_in(&mut self) {
        self.scale = round_step(self.scale + SCALE_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = round_step(self.scale - SCALE_STEP).max(MIN_SCALE);
    }

    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_SCALE
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// PDF open parameters appended to the document URL.
    pub fn url_fragment(&self) -> String {
        format!("#toolbar=1&navpanes=1&scrollbar=1&zoom={}", self.zoom_percent())
    }
}

// Keeps repeated 0.2 steps from drifting (1.2 + 0.2 != 1.4 in f32).
fn round_step(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
