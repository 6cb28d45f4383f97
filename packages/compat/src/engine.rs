use serde::{Deserialize, Serialize};

/// A runtime that output can be targeted at
///
/// Browser engines gate CSS features and prefixes. The others (`es`, `node`,
/// ...) exist because targets are shared with the script side of the
/// pipeline, and are ignored by every CSS decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Chrome,
    Deno,
    Edge,
    Es,
    Firefox,
    Hermes,
    Ie,
    Ios,
    Node,
    Opera,
    Rhino,
    Safari,
}

impl Engine {
    pub const ALL: &'static [Engine] = &[
        Engine::Chrome,
        Engine::Deno,
        Engine::Edge,
        Engine::Es,
        Engine::Firefox,
        Engine::Hermes,
        Engine::Ie,
        Engine::Ios,
        Engine::Node,
        Engine::Opera,
        Engine::Rhino,
        Engine::Safari,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Engine::Chrome => "chrome",
            Engine::Deno => "deno",
            Engine::Edge => "edge",
            Engine::Es => "es",
            Engine::Firefox => "firefox",
            Engine::Hermes => "hermes",
            Engine::Ie => "ie",
            Engine::Ios => "ios",
            Engine::Node => "node",
            Engine::Opera => "opera",
            Engine::Rhino => "rhino",
            Engine::Safari => "safari",
        }
    }

    /// Look up an engine by its lowercase name
    pub fn from_name(name: &str) -> Option<Engine> {
        Engine::ALL.iter().copied().find(|engine| engine.name() == name)
    }

    pub fn is_browser(self) -> bool {
        matches!(
            self,
            Engine::Chrome
                | Engine::Edge
                | Engine::Firefox
                | Engine::Ie
                | Engine::Ios
                | Engine::Opera
                | Engine::Safari
        )
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
