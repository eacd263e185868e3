use searchlet::{
    backend::fetch::spawn_fetch,
    core::geo::Point,
    query::field::QueryField,
    ui::{PanelUi, PopupManager, TabsUi, TagsUi},
    GeoLayer, MapView, QueryState, SearchClient, SearchViewOptions, SidePanel, TabState, ViewTab,
};
use std::sync::Arc;

/// Standalone search-results viewer application
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Searchlet - Search Results Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "searchlet-app",
        options,
        Box::new(|cc| Box::new(SearchletApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

/// The main application struct
struct SearchletApp {
    query: QueryState,
    tabs: TabState,
    panel: SidePanel,
    map: MapView,
    client: Arc<SearchClient>,
    tags_ui: TagsUi,
    tabs_ui: TabsUi,
    panel_ui: PanelUi,
    popups: PopupManager,
    probed: bool,
}

impl SearchletApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let options = SearchViewOptions::default()
            .with_search_endpoint("http://localhost:8000/search/")
            .with_resolve_endpoint("http://localhost:8000/resolve");

        let query = QueryState::from_fields(vec![
            QueryField::query("windmill"),
            QueryField::facet("municipality:Amsterdam", "Amsterdam"),
        ]);

        Self {
            query,
            tabs: TabState::new(),
            panel: SidePanel::new(),
            map: MapView::new(options.clone()),
            client: Arc::new(SearchClient::new(options)),
            tags_ui: TagsUi::new(),
            tabs_ui: TabsUi::new(),
            panel_ui: PanelUi::new(),
            popups: PopupManager::new(),
            probed: false,
        }
    }

    fn run_fetch(&mut self, job: searchlet::backend::fetch::FetchJob) {
        spawn_fetch(self.client.clone(), job, self.map.outcome_sender());
    }

    /// Draws the marker layer as dots, hit-tests clicks, and renders the
    /// popups for whatever was hit.
    fn show_geo(&mut self, ui: &mut egui::Ui) {
        let marker_count = self.map.current_layer().map(|l| l.len()).unwrap_or(0);
        ui.label(format!(
            "Geo view: {} markers | tiles: {}",
            marker_count,
            self.map.tile_config().url_template
        ));

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let origin = response.rect.min;

        if let Some(layer) = self.map.current_layer() {
            let (radius, color) = match layer {
                GeoLayer::Markers(_) => (5.0, egui::Color32::from_rgb(51, 122, 183)),
                GeoLayer::Clusters(_) => (9.0, egui::Color32::from_rgb(92, 184, 92)),
            };
            for position in layer.positions() {
                let px = self.map.viewport().lat_lng_to_pixel(&position);
                let center = origin + egui::vec2(px.x as f32, px.y as f32);
                painter.circle_filled(center, radius, color);
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = pointer - origin;
                let hit = self
                    .map
                    .hit_test(Point::new(local.x as f64, local.y as f64), 12.0)
                    .cloned();
                if let Some(marker) = hit {
                    let resolve = self.client.options().resolve_endpoint.clone();
                    self.popups.show_marker_popup(&marker, &resolve);
                }
            }
        }

        self.popups.update();
        if let Err(e) = self.popups.render(ui, self.map.viewport()) {
            log::warn!("popup rendering failed: {}", e);
        }
    }
}

impl eframe::App for SearchletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One probe fetch before the map is ever shown, to learn whether
        // the geo tabs should exist at all.
        if !self.probed {
            self.probed = true;
            let query = self.query.query_string();
            if let Some(job) = self.map.probe_job(&query) {
                self.run_fetch(job);
            }
        }

        let events = self.map.poll(&mut self.tabs);
        if !events.is_empty() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.tags_ui.show(ui, &mut self.query);
                if self.query.take_submission() {
                    log::debug!("form resubmission requested");
                }
                self.panel_ui.show(ui, &mut self.panel, |ui| {
                    ui.heading("Facets");
                    ui.label("Refine your search here.");
                });
            });

            if let Some(tab) = self.tabs_ui.show(ui, &mut self.tabs) {
                log::debug!("switched to {} view", tab);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tabs.active() {
            ViewTab::List => {
                ui.heading("Results");
                ui.label("List view");
            }
            ViewTab::Grid => {
                ui.heading("Results");
                ui.label("Grid view");
            }
            ViewTab::Geo => {
                let size = ui.available_size();
                self.map
                    .invalidate_size(Point::new(size.x as f64, size.y as f64));

                if self.tabs.take_geo_refresh() {
                    let query = self.query.query_string();
                    if let Some(job) = self.map.view_settled(&query) {
                        self.run_fetch(job);
                    }
                }

                self.show_geo(ui);
            }
        });
    }
}
