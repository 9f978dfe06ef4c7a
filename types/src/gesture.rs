/// Live state of one drag along the horizontal axis.
///
/// Created at gesture start and discarded at gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// Resting position captured once at gesture start.
    pub origin_offset: f64,
    pub live_offset: f64,
    pub live_velocity: f64,
}

impl GestureState {
    #[must_use]
    pub const fn starting_at(origin_offset: f64) -> Self {
        Self {
            origin_offset,
            live_offset: origin_offset,
            live_velocity: 0.0,
        }
    }
}
