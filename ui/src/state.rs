use tabula_business::{DemoConfig, Route, TablePage};

/// The main application state.
///
/// Exactly one table page is mounted at a time; it belongs to the current
/// route and is rebuilt from a fresh dataset on every navigation.
#[derive(Debug)]
pub struct State {
    pub config: DemoConfig,
    pub route: Route,
    pub page: TablePage,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

impl State {
    pub fn new(config: DemoConfig) -> Self {
        let route = Route::default();
        let page = mount(&config, route);
        Self {
            config,
            route,
            page,
        }
    }

    /// Small seeded state for tests.
    pub fn test(rows: usize) -> Self {
        Self::new(DemoConfig::new(rows, Some(42)))
    }

    /// Unmounts the current page and mounts the one for `route`.
    pub fn navigate(&mut self, route: Route) {
        log::info!("Route {:?} -> {:?}", self.route, route);
        self.route = route;
        self.page = mount(&self.config, route);
    }
}

fn mount(config: &DemoConfig, route: Route) -> TablePage {
    let rows = config.generate_rows();
    log::info!("Mounting {} with {} rows", route.label(), rows.len());
    TablePage::new(rows)
}
