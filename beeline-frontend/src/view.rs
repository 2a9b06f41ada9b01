/// The user interface elements a [`DistanceRequester`](crate::DistanceRequester) works with.
///
/// All methods take `&self` like DOM handles do,
/// implementations need interior mutability.
pub trait DistanceView {
    /// Current value of the first input field.
    fn address1(&self) -> String;

    /// Current value of the second input field.
    fn address2(&self) -> String;

    /// Show or hide the loading indicator.
    fn set_loading(&self, visible: bool);

    /// Replace the text of the result element.
    fn set_result(&self, text: &str);
}
