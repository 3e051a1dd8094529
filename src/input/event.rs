/// Platform-agnostic UI events from the carousel controls.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::ViewerCommand) values.
/// Keyboard input goes through
/// [`handle_key_press`](super::InputProcessor::handle_key_press) instead.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::NextButton);
/// viewer.execute(cmd, Instant::now());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The "previous" arrow or button was clicked.
    PreviousButton,
    /// The "next" arrow or button was clicked.
    NextButton,
    /// A carousel dot indicator was clicked.
    DotClicked {
        /// Zero-based slide index of the dot.
        index: usize,
    },
    /// The range slider reported a value.
    SliderMoved {
        /// Zero-based slide index under the slider thumb.
        value: usize,
    },
    /// The auto-rotate checkbox changed.
    AutoRotateChecked {
        /// New checkbox state.
        checked: bool,
    },
    /// The play/pause auto button was clicked.
    AutoRotateButton,
}
