use egui_kittest::Harness;
use tabula_ui::TabulaApp;
use tabula_ui::state::State;

/// Rows generated per page mount in UI tests.
pub const TEST_ROWS: usize = 24;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let harness = Harness::builder()
            .with_size(egui::Vec2::new(1400.0, 1000.0))
            .build_ui_state(app, State::test(TEST_ROWS));

        Self { harness }
    }
}

impl<'a> TestCtx<'a, TabulaApp> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        let app = TabulaApp::new(State::test(TEST_ROWS));
        let harness = Harness::builder()
            .with_size(egui::Vec2::new(1400.0, 1000.0))
            .build_eframe(|_| app);

        Self { harness }
    }
}
