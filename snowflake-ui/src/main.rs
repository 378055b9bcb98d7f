use std::time::Duration;

use eframe::{egui, Frame};
use egui::{Context, RichText};

use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::Result;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "http://127.0.0.1:5000/v1";

/// Row as returned by the server. Only the fields shown are kept.
#[derive(Debug, Clone, Deserialize)]
struct Snowflake {
    id: u64,
    seed: String,
    size: usize,
    style: String,
    pattern: String,
    melted: bool,
}

/// Body of `POST /v1/snowflakes`. Missing fields are chosen by the server.
#[derive(Debug, Default, Serialize)]
struct CreateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StyleInfo {
    name: String,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to `/v1/snowflakes`.
    fn list(&self) -> Result<Vec<Snowflake>> {
        self.client
            .get(format!("{BASE_URL}/snowflakes"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Sends a GET request to `/v1/styles`.
    fn styles(&self) -> Result<Vec<String>> {
        let styles: Vec<StyleInfo> = self.client
            .get(format!("{BASE_URL}/styles"))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(styles.into_iter().map(|s| s.name).collect())
    }

    /// Sends a POST request to `/v1/snowflakes` with a JSON body.
    fn create(&self, body: &CreateBody) -> Result<Snowflake> {
        self.client
            .post(format!("{BASE_URL}/snowflakes"))
            .json(body)
            .send()?
            .error_for_status()?
            .json()
    }

    /// Sends a PUT request to `/v1/snowflakes/{id}/melt`.
    fn melt(&self, id: u64) -> Result<Snowflake> {
        self.client
            .put(format!("{BASE_URL}/snowflakes/{id}/melt"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Sends a DELETE request to `/v1/snowflakes/{id}`.
    fn delete(&self, id: u64) -> Result<Snowflake> {
        self.client
            .delete(format!("{BASE_URL}/snowflakes/{id}"))
            .send()?
            .error_for_status()?
            .json()
    }
}

/// What the user clicked on a list row, applied after the list is drawn.
enum RowAction {
    Show(u64),
    Melt(u64),
    Delete(u64),
}

/// Global UI state (MUST persist between frames in egui).
struct SnowflakeUI {
    rest: RESTContext,
    status: Option<String>,

    seed: String,
    use_size: bool,
    size: usize,
    style: Option<String>, // None = let the server pick
    available_styles: Vec<String>,

    snowflakes: Vec<Snowflake>,
    shown: Option<u64>,
}

impl SnowflakeUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new()?,
            status: None,

            seed: String::new(),
            use_size: false,
            size: 9,
            style: None,
            available_styles: Vec::new(),

            snowflakes: Vec::new(),
            shown: None,
        };
        ui.load_styles();
        ui.refresh();
        Ok(ui)
    }

    /// Builds the creation body.
    ///
    /// IMPORTANT:
    /// - No unused parameters are sent
    /// - An empty seed lets the server derive one
    fn build_body(&self) -> CreateBody {
        CreateBody {
            seed: Some(self.seed.trim().to_owned()).filter(|s| !s.is_empty()),
            size: self.use_size.then_some(self.size),
            style: self.style.clone(),
        }
    }

    fn report(&mut self, context: &str, e: reqwest::Error) {
        warn!("{context} failed: {e}");
        self.status = Some(format!("Error: {e}"));
    }

    fn load_styles(&mut self) {
        match self.rest.styles() {
            Ok(styles) => self.available_styles = styles,
            Err(e) => self.report("Loading styles", e),
        }
    }

    /// Reloads the stored snowflakes.
    fn refresh(&mut self) {
        match self.rest.list() {
            Ok(snowflakes) => self.snowflakes = snowflakes,
            Err(e) => self.report("Listing snowflakes", e),
        }
    }

    /// Performs the creation request and shows the result.
    fn create(&mut self) {
        match self.rest.create(&self.build_body()) {
            Ok(snowflake) => {
                info!("Created snowflake {}", snowflake.id);
                self.status = Some(format!("Created snowflake {} from seed '{}'", snowflake.id, snowflake.seed));
                self.shown = Some(snowflake.id);
                self.refresh();
            }
            Err(e) => self.report("Creating snowflake", e),
        }
    }

    fn apply(&mut self, action: RowAction) {
        match action {
            RowAction::Show(id) => self.shown = Some(id),
            RowAction::Melt(id) => match self.rest.melt(id) {
                Ok(_) => {
                    self.status = Some(format!("Snowflake {id} melted"));
                    self.refresh();
                }
                Err(e) => self.report("Melting snowflake", e),
            },
            RowAction::Delete(id) => match self.rest.delete(id) {
                Ok(_) => {
                    self.status = Some(format!("Snowflake {id} deleted"));
                    if self.shown == Some(id) {
                        self.shown = None;
                    }
                    self.refresh();
                }
                Err(e) => self.report("Deleting snowflake", e),
            },
        }
    }

    fn shown_snowflake(&self) -> Option<&Snowflake> {
        let id = self.shown?;
        self.snowflakes.iter().find(|s| s.id == id)
    }
}

impl eframe::App for SnowflakeUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::SidePanel::left("snowflake_list")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Snowflakes");
                    if ui.button("Refresh").clicked() {
                        self.refresh();
                    }
                });
                ui.separator();

                let mut action = None;
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for snowflake in &self.snowflakes {
                        ui.horizontal(|ui| {
                            let label = format!(
                                "#{} {} {}×{}{}",
                                snowflake.id,
                                snowflake.style,
                                snowflake.size,
                                snowflake.size,
                                if snowflake.melted { " (melted)" } else { "" }
                            );
                            if ui.selectable_label(self.shown == Some(snowflake.id), label).clicked() {
                                action = Some(RowAction::Show(snowflake.id));
                            }
                            if ui.add_enabled(!snowflake.melted, egui::Button::new("Melt")).clicked() {
                                action = Some(RowAction::Melt(snowflake.id));
                            }
                            if ui.button("Delete").clicked() {
                                action = Some(RowAction::Delete(snowflake.id));
                            }
                        });
                    }
                });

                if let Some(action) = action {
                    self.apply(action);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {

            egui::Grid::new("snowflake_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {

                    // seed
                    ui.label("Seed (empty = random)");
                    ui.text_edit_singleline(&mut self.seed);
                    ui.end_row();

                    // size checkbox + value
                    ui.checkbox(&mut self.use_size, "Fixed size");
                    if self.use_size {
                        ui.add(
                            egui::DragValue::new(&mut self.size)
                                .range(1..=20)
                                .speed(1),
                        );
                    } else {
                        ui.label("Random odd size");
                    }
                    ui.end_row();

                    // style
                    ui.label("Style");
                    egui::ComboBox::from_id_salt("style")
                        .selected_text(self.style.as_deref().unwrap_or("random"))
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.style, None, "random");
                            for style in &self.available_styles {
                                ui.selectable_value(&mut self.style, Some(style.clone()), style);
                            }
                        });
                    ui.end_row();

                    ui.separator();
                    ui.end_row();

                    // Create button
                    if ui
                        .add_sized([200.0, 40.0], egui::Button::new("Create"))
                        .clicked()
                    {
                        self.create();
                    }
                    ui.label(self.status.as_deref().unwrap_or("Click Create to start"));
                    ui.end_row();
                });

            ui.separator();

            match self.shown_snowflake() {
                Some(snowflake) => {
                    ui.label(format!("Seed: {}", snowflake.seed));
                    let pattern = RichText::new(&snowflake.pattern).monospace().size(18.0);
                    if snowflake.melted {
                        ui.label(pattern.weak());
                    } else {
                        ui.label(pattern);
                    }
                }
                None => {
                    ui.label("Select a snowflake to display it");
                }
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "snowflakes",
        options,
        Box::new(|_| Ok(Box::new(SnowflakeUI::new()?))),
    )
}
