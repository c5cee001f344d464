#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::collections::BTreeMap;
use std::{fs, path::Path};

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use plane_assist::{
    atmosphere,
    calculation::{CalcError, CalculationInput, CalculationKind, CalculationResult},
    cli::Args,
    config::{self, Config},
    export::{self, ExportTemplate},
    field::Field,
    i18n::{self, keys, Translator},
    logging,
    performance::{FormulaMode, PerformanceCalculator},
    ui_cli,
};
use rfd::FileDialog;
use tracing::warn;

const LANGUAGES: [(&str, &str); 3] = [("en-us", "English"), ("ko-kr", "한국어"), ("de-de", "Deutsch")];

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut cfg = config::load_or_default().unwrap_or_default();
    if let Some(mode) = args.mode {
        cfg.formula_mode = mode;
    }
    let choice = i18n::resolve_language(args.language.as_deref(), cfg.language.as_deref());

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(900.0, 680.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "PlaneAssist",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("폰트 설정 실패: {e}");
            }
            Box::new(GuiApp::new(cfg, &choice.code, args.lang_pack, args.altitude))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["PlaneAssist.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 기본 폰트 뒤에 추가한다. 찾지 못하면 Err.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        Path::new("assets/fonts/malgun.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc").to_path_buf(),
        Path::new("/usr/share/fonts/truetype/nanum/NanumGothic.ttf").to_path_buf(),
        Path::new("/System/Library/Fonts/AppleSDGothicNeo.ttc").to_path_buf(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.insert(0, fonts.join("malgun.ttf"));
        candidates.insert(1, fonts.join("gulim.ttc"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found".into())
}

/// 계산 결과와 그 입력. 일괄 계산 결과만 내보낼 수 있다.
struct Outcome {
    kind: CalculationKind,
    input: CalculationInput,
    result: CalculationResult,
}

struct GuiApp {
    config: Config,
    tr: Translator,
    lang_code: String,
    lang_pack: Option<String>,
    altitude_m: f64,
    /// 계산기에 실제로 적용된 고도
    applied_altitude_m: f64,
    mode: FormulaMode,
    calculator: Option<PerformanceCalculator>,
    tab: CalculationKind,
    inputs: BTreeMap<Field, f64>,
    outcome: Option<Outcome>,
    message: Option<String>,
    show_disclaimer: bool,
}

impl GuiApp {
    fn new(config: Config, lang_code: &str, lang_pack: Option<String>, altitude_m: f64) -> Self {
        let tr = Translator::new_with_pack(lang_code, lang_pack.as_deref());
        let mode = config.formula_mode;
        let mut app = Self {
            config,
            tr,
            lang_code: lang_code.to_string(),
            lang_pack,
            altitude_m,
            applied_altitude_m: altitude_m,
            mode,
            calculator: None,
            tab: CalculationKind::Aggregate,
            inputs: default_inputs(),
            outcome: None,
            message: None,
            show_disclaimer: true,
        };
        app.apply_atmosphere();
        app
    }

    /// 고도/모드를 적용해 계산기를 다시 만든다.
    fn apply_atmosphere(&mut self) {
        match atmosphere::lookup(self.altitude_m) {
            Ok(atmo) => {
                self.calculator = Some(PerformanceCalculator::new(atmo, self.mode));
                self.applied_altitude_m = self.altitude_m;
                self.message = None;
            }
            Err(err) => {
                self.calculator = None;
                self.message = Some(format!("{}: {err}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
        self.outcome = None;
    }

    fn set_language(&mut self, code: &str) {
        self.lang_code = code.to_string();
        self.tr = Translator::new_with_pack(code, self.lang_pack.as_deref());
        self.config.language = Some(code.to_string());
        self.save_config();
    }

    fn save_config(&mut self) {
        self.config.formula_mode = self.mode;
        if let Err(err) = self.config.save() {
            warn!(%err, "설정 저장 실패");
        }
    }

    fn calculate(&mut self) {
        let Some(calculator) = self.calculator else {
            return;
        };
        let mut input = CalculationInput::new();
        for field in self.tab.required_fields() {
            input.set(*field, self.inputs.get(field).copied().unwrap_or_default());
        }
        match calculator.calculate(self.tab, &input) {
            Ok(result) => {
                self.outcome = Some(Outcome {
                    kind: self.tab,
                    input,
                    result,
                });
                self.message = None;
            }
            Err(CalcError::Domain(err)) => {
                self.outcome = None;
                self.message = Some(ui_cli::describe_domain_error(&self.tr, &err));
            }
            Err(CalcError::Input(err)) => {
                self.outcome = None;
                self.message = Some(format!("{}: {err}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn export(&mut self) {
        let Some(outcome) = &self.outcome else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("Excel", &["xlsx"])
            .set_directory(self.config.export_dir())
            .set_file_name("PlaneAssist.xlsx")
            .save_file()
        else {
            return;
        };
        let values = export::collect_values(&outcome.input, &outcome.result);
        let tr = &self.tr;
        let written = export::export_values(
            &ExportTemplate::aggregate(),
            &values,
            |f| tr.t(f.label_key()).to_string(),
            &path,
        );
        self.message = Some(match written {
            Ok(()) => {
                if let Some(dir) = path.parent() {
                    self.config.export_dir = Some(dir.display().to_string());
                }
                tr.tf(keys::EXPORT_DONE, &[("path", path.display().to_string())])
            }
            Err(err) => tr.tf(keys::EXPORT_FAILED, &[("error", err.to_string())]),
        });
        self.save_config();
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("PlaneAssist");
            ui.separator();
            ui.label(self.tr.t(keys::GUI_ALTITUDE));
            let altitude = ui.add(
                egui::DragValue::new(&mut self.altitude_m)
                    .speed(10.0)
                    .clamp_range(atmosphere::MIN_ALTITUDE_M..=atmosphere::MAX_ALTITUDE_M),
            );
            if altitude.changed() {
                self.apply_atmosphere();
            }
            ui.label(self.tr.t(keys::GUI_MODE));
            egui::ComboBox::from_id_source("mode")
                .selected_text(self.tr.t(mode_key(self.mode)))
                .show_ui(ui, |ui| {
                    for mode in [FormulaMode::Legacy, FormulaMode::Corrected] {
                        ui.selectable_value(&mut self.mode, mode, self.tr.t(mode_key(mode)));
                    }
                });
            if ui.button(self.tr.t(keys::GUI_APPLY)).clicked() {
                self.apply_atmosphere();
                self.save_config();
            }
            ui.separator();
            ui.label(self.tr.t(keys::GUI_LANGUAGE));
            let mut selected = self.lang_code.clone();
            egui::ComboBox::from_id_source("language")
                .selected_text(language_name(&selected))
                .show_ui(ui, |ui| {
                    for (code, name) in LANGUAGES {
                        ui.selectable_value(&mut selected, code.to_string(), name);
                    }
                });
            if selected != self.lang_code {
                self.set_language(&selected);
            }
            ui.checkbox(&mut self.show_disclaimer, self.tr.t(keys::GUI_SHOW_DISCLAIMER));
        });
        if let Some(calc) = &self.calculator {
            let atmo = calc.atmosphere();
            ui.label(self.tr.tf(
                keys::ATMOSPHERE_INFO,
                &[
                    ("altitude", self.applied_altitude_m.to_string()),
                    ("density", atmo.density().to_string()),
                    ("gravity", atmo.gravity().to_string()),
                ],
            ));
        }
    }

    fn input_grid(&mut self, ui: &mut egui::Ui) {
        ui.label(self.tr.t(keys::NOTE_LEVEL_FLIGHT));
        egui::Grid::new("input_grid")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for field in self.tab.required_fields() {
                    let value = self.inputs.entry(*field).or_insert(0.0);
                    ui.label(self.tr.t(field.label_key()))
                        .on_hover_text(self.tr.t(self.tab.prompt_key(*field)));
                    ui.add(egui::DragValue::new(value).speed(0.1));
                    ui.label(field.unit());
                    ui.end_row();
                }
            });
    }

    fn results(&mut self, ui: &mut egui::Ui) {
        let mut want_export = false;
        if let Some(outcome) = &self.outcome {
            ui.heading(self.tr.t(keys::GUI_RESULTS));
            for line in ui_cli::result_lines(&self.tr, outcome.kind, &outcome.result) {
                ui.label(line);
            }
            if let Some(gs) = outcome.result.get(Field::GroundSpeed) {
                ui.label(self.tr.tf(
                    keys::RESULT_GROUND_SPEED,
                    &[("value", ui_cli::format_value(gs))],
                ));
            }
            if outcome.kind == CalculationKind::Aggregate {
                want_export = ui.button(self.tr.t(keys::GUI_EXPORT)).clicked();
            }
        }
        if want_export {
            self.export();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.top_bar(ui));

        if self.show_disclaimer {
            let mut open = true;
            egui::Window::new("Disclaimer")
                .open(&mut open)
                .vscroll(true)
                .show(ctx, |ui| {
                    ui.label(self.tr.t(keys::WELCOME));
                    ui.separator();
                    ui.label(self.tr.t(keys::DISCLAIMER));
                });
            self.show_disclaimer = open;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for kind in CalculationKind::ALL {
                    if ui
                        .selectable_value(&mut self.tab, kind, self.tr.t(tab_key(kind)))
                        .clicked()
                    {
                        self.outcome = None;
                        self.message = None;
                    }
                }
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.input_grid(ui);
                ui.add_space(8.0);
                let enabled = self.calculator.is_some();
                if ui
                    .add_enabled(enabled, egui::Button::new(self.tr.t(keys::GUI_CALCULATE)))
                    .clicked()
                {
                    self.calculate();
                }
                if let Some(msg) = &self.message {
                    ui.colored_label(egui::Color32::LIGHT_RED, msg);
                }
                ui.separator();
                self.results(ui);
            });
        });
    }
}

fn default_inputs() -> BTreeMap<Field, f64> {
    [
        (Field::ClMax, 1.5),
        (Field::Cd, 0.02),
        (Field::Mass, 500.0),
        (Field::Velocity, 15.0),
        (Field::VelocityMin, 15.0),
        (Field::Area, 30.0),
        (Field::Capacity, 10_000.0),
        (Field::CapacityUsed, 80.0),
        (Field::CruiseCurrentDraw, 2.0),
        (Field::BatteryVoltage, 12.0),
        (Field::WattagePayload, 50.0),
        (Field::WattageP, 50.0),
        (Field::FlightTime, 60.0),
        (Field::TrueAirspeed, 20.0),
        (Field::WindSpeed, 5.0),
        (Field::WindOrigin, 180.0),
        (Field::Course, 45.0),
    ]
    .into_iter()
    .collect()
}

fn mode_key(mode: FormulaMode) -> &'static str {
    match mode {
        FormulaMode::Legacy => keys::MODE_LEGACY,
        FormulaMode::Corrected => keys::MODE_CORRECTED,
    }
}

fn tab_key(kind: CalculationKind) -> &'static str {
    match kind {
        CalculationKind::WingArea => keys::LABEL_WING_AREA,
        CalculationKind::StallSpeed => keys::LABEL_STALL_SPEED,
        CalculationKind::Thrust => keys::LABEL_THRUST,
        CalculationKind::FlightTime => keys::LABEL_FLIGHT_TIME,
        CalculationKind::Range => keys::LABEL_RANGE,
        CalculationKind::Aggregate => keys::MAIN_MENU_AGGREGATE,
    }
}

fn language_name(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, n)| *n)
        .unwrap_or("English")
}
