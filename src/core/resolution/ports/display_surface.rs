/// Output surface the resolution controller drives.
pub trait DisplaySurface {
    fn set_pixel_ratio(&mut self, pixel_ratio: f64);

    /// Short-lived user-facing message, e.g. `"Resolution: 88%"`.
    fn notify(&mut self, message: &str);
}
