// What the presentation layer reads each frame
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CarouselState {
    pub current_index: Option<usize>, // None while the carousel has no slides
    pub is_playing: bool,
    pub len: usize,
}

// User input routed through the controller's single entry point
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    TogglePlayPause,
    Teardown,
}
