use minijinja::{context, Environment};

pub const TIMELINE_TEMPLATE: &str = "timeline.html";

/// Template environment with every page compiled in.
///
/// Templates ending in `.html` are auto-escaped.
pub fn template_env() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(TIMELINE_TEMPLATE, include_str!("../templates/timeline.html"))?;
    Ok(env)
}

/// Render the timeline page for the raw `+`-joined group path segment.
pub fn render_timeline(env: &Environment<'_>, meetup: &str) -> Result<String, minijinja::Error> {
    env.get_template(TIMELINE_TEMPLATE)?
        .render(context! { meetup => meetup })
}
