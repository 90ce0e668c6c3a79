mod router;

pub use router::{Flow, route_event, route_events};

/// Something the user did in the window, classified from the widget's event key.
///
/// Buttons raise their label as the key; value widgets raise their name wrapped in
/// underscores (`_distance_`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The window was closed
    Quit,
    /// The command line was submitted
    Run,
    /// One of the four movement buttons, as its one-letter code (`f`, `b`, `l`, `r`)
    Move(char),
    /// `Pen Up`, `Pen Down`, `Hide` or `Show`, keeping the button label
    Toggle(String),
    /// A value widget changed; holds the name without the surrounding underscores
    WidgetChanged(String),
    /// `Clear` or `Home`
    Action(String),
    /// Create a turtle named by the new-turtle entry
    NewTurtle,
    /// Anything the router doesn't handle
    Ignored(String),
}

impl UiEvent {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Run" => UiEvent::Run,
            "Forward" | "Back" | "Left" | "Right" => key
                .chars()
                .next()
                .map(|c| UiEvent::Move(c.to_ascii_lowercase()))
                .unwrap_or_else(|| UiEvent::Ignored(key.to_owned())),
            "Pen Up" | "Pen Down" | "Hide" | "Show" => UiEvent::Toggle(key.to_owned()),
            "Clear" | "Home" => UiEvent::Action(key.to_owned()),
            "New Turtle" => UiEvent::NewTurtle,
            _ if key.len() >= 2 && key.starts_with('_') && key.ends_with('_') => {
                UiEvent::WidgetChanged(key[1..key.len() - 1].to_owned())
            }
            _ => UiEvent::Ignored(key.to_owned()),
        }
    }
}

/// Operation name a toggle button invokes: pen buttons drop the space and lowercase
/// (`penup`), visibility buttons lowercase and gain a `turtle` suffix (`hideturtle`)
pub fn toggle_operation(label: &str) -> String {
    if label.starts_with("Pen") {
        label.split(' ').collect::<String>().to_lowercase()
    } else {
        format!("{}turtle", label.to_lowercase())
    }
}
