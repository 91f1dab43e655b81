use tracing::debug;
use wood_config::AppConfig;
use wood_forms::{OrderViewer, SellForm};
use wood_ledger::Ledger;

/// Width x height in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale both axes, truncating toward zero.
    pub fn scaled(&self, fraction: f64) -> Self {
        Self {
            width: (self.width as f64 * fraction) as u32,
            height: (self.height as f64 * fraction) as u32,
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub geometry: Geometry,
}

/// Owner of the session ledger.
///
/// Dialogs borrow the ledger mutably for as long as they are open, so at
/// most one dialog can touch it at a time.
pub struct AppShell {
    config: AppConfig,
    ledger: Ledger,
}

impl AppShell {
    pub fn new(config: AppConfig) -> Self {
        Self::with_ledger(config, Ledger::new())
    }

    pub fn with_ledger(config: AppConfig, ledger: Ledger) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    pub fn main_window(&self) -> WindowSpec {
        WindowSpec {
            title: self.config.shell.main_title.clone(),
            geometry: Geometry::new(self.config.shell.main_width, self.config.shell.main_height),
        }
    }

    /// Order viewer size: `viewer_fraction` of the configured screen.
    pub fn viewer_geometry(&self) -> Geometry {
        Geometry::new(
            self.config.display.screen_width,
            self.config.display.screen_height,
        )
        .scaled(self.config.shell.viewer_fraction)
    }

    /// "Sell Wood": a fresh one-shot form on the session ledger.
    pub fn sell_wood(&mut self) -> SellForm<'_> {
        debug!(orders = self.ledger.len(), "opening sell form");
        SellForm::new(&mut self.ledger)
    }

    /// "View Orders": a fresh viewer with no selection.
    pub fn view_orders(&mut self) -> OrderViewer<'_> {
        debug!(orders = self.ledger.len(), "opening order viewer");
        OrderViewer::new(&mut self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_is_eighty_percent_of_screen() {
        let shell = AppShell::new(AppConfig::default());
        assert_eq!(shell.viewer_geometry(), Geometry::new(1536, 864));
        assert_eq!(shell.viewer_geometry().to_string(), "1536x864");
    }

    #[test]
    fn main_window_uses_config() {
        let shell = AppShell::new(AppConfig::default());
        let w = shell.main_window();
        assert_eq!(w.title, "Wood Store");
        assert_eq!(w.geometry, Geometry::new(400, 300));
    }

    #[test]
    fn dialogs_share_the_ledger() {
        let mut shell = AppShell::new(AppConfig::default());
        shell.sell_wood().submit("500", "1", "1").unwrap();
        assert_eq!(shell.view_orders().len(), 1);
        shell.sell_wood().submit("600", "2", "1.5").unwrap();
        assert_eq!(shell.ledger().len(), 2);
    }

    #[test]
    fn scaling_truncates() {
        assert_eq!(Geometry::new(1001, 999).scaled(0.5), Geometry::new(500, 499));
    }
}
