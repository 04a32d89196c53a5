use lifeplan_domain::theme::ThemeConfig;
use yew::prelude::*;

/// Theme provided by the app shell, or the default theme outside of it
#[hook]
pub fn use_theme() -> ThemeConfig {
    use_context::<ThemeConfig>().unwrap_or_default()
}
