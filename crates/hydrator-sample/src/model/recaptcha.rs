use input_hydrator::input;

input! {
    /// Verification response of a reCAPTCHA check, as posted back by the widget.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecaptchaResult {
        pub success: bool,
        pub action: String,
        pub score: f64,
    }
}
