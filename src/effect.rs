//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for the given city
    FetchWeather { city: String },
    /// Deliver a message through the configured notifier
    Notify { message: String },
}
