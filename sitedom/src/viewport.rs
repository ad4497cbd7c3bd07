/// Window metrics as seen by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scroll_y: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
        }
    }

    /// Equivalent of `matchMedia("(max-width: <px>px)").matches`.
    pub fn matches_max_width(&self, px: u32) -> bool {
        self.width <= px
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440, 900)
    }
}
