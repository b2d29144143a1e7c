//! Top-level application tying together the toolbar, editor pane,
//! status bar, and persistence.

mod editor_pane;
mod file_ops;
mod shortcuts;
mod status_bar;
mod toolbar;

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;

use rich_pad_config::store::resolve_data_dir;
use rich_pad_config::theme::builtin_default;
use rich_pad_config::{AppConfig, DocumentStore, EditorTheme, HexColor};
use rich_pad_core::error::ImportError;
use rich_pad_core::io::ImportedDocument;
use rich_pad_core::{ContentSurface, EditorSession, FormatCommand, MarkupBuffer, Snapshot};

/// How long a transient status notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// File to import on startup.
    pub file: Option<PathBuf>,
    /// Skip restoring the saved document from the store.
    pub fresh: bool,
    /// Override the document store location.
    pub data_dir: Option<PathBuf>,
}

/// Which color theme to use.
///
/// Wraps a theme name. The special value `"System"` follows the OS
/// dark-mode preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMode(pub String);

impl Default for ThemeMode {
    fn default() -> Self {
        Self::system()
    }
}

impl ThemeMode {
    pub fn system() -> Self {
        Self("System".to_string())
    }

    pub fn is_system(&self) -> bool {
        self.0 == "System"
    }

    /// Resolves "System" to a concrete theme name using the OS preference.
    /// Non-system modes return their own name.
    pub fn resolve(&self) -> &str {
        if self.is_system() {
            match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => "Dark",
                _ => "Default",
            }
        } else {
            &self.0
        }
    }
}

/// Severity of a transient status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient status message shown in the status bar.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub posted_at: Instant,
}

/// Which URL the prompt dialog is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UrlPromptKind {
    Link,
    Image,
}

#[derive(Debug, Clone)]
pub(crate) struct UrlPrompt {
    pub kind: UrlPromptKind,
    pub url: String,
}

/// The main application state.
pub struct App {
    pub(crate) session: EditorSession,
    pub(crate) surface: MarkupBuffer,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) font_size: f32,
    pub(crate) placeholder_text: String,
    pub(crate) auto_save_enabled: bool,
    pub(crate) auto_save_interval_secs: u64,
    last_auto_save: Instant,
    pub(crate) default_export_extension: String,
    pub(crate) remember_last_folder: bool,
    pub(crate) last_used_folder: Option<PathBuf>,
    pub(crate) reveal_after_export: bool,
    available_themes: Vec<EditorTheme>,
    config_path: PathBuf,
    pub(crate) store: Option<DocumentStore>,
    /// Single in-flight file read; the upload control is disabled while
    /// this is `Some`.
    pub(crate) pending_import: Option<Receiver<Result<ImportedDocument, ImportError>>>,
    pub(crate) notices: Vec<Notice>,
    pub(crate) text_color: [u8; 3],
    pub(crate) highlight_color: [u8; 3],
    pub(crate) url_prompt: Option<UrlPrompt>,
    last_window_title: String,
}

impl App {
    /// Creates a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = AppConfig::config_path();
        let app_config = AppConfig::load_or_create(&config_path);

        let mut theme_mode = ThemeMode(app_config.current_theme.clone());
        let resolved_name = theme_mode.resolve().to_string();
        let theme = match app_config.find_theme(&resolved_name).cloned() {
            Some(def) => def,
            None => {
                tracing::warn!("Theme '{}' not found, falling back to System", resolved_name);
                theme_mode = ThemeMode::system();
                let fallback_name = theme_mode.resolve().to_string();
                app_config
                    .find_theme(&fallback_name)
                    .cloned()
                    .unwrap_or_else(builtin_default)
            }
        };
        Self::apply_theme_visuals(&cc.egui_ctx, &theme);

        let data_dir = args.data_dir.clone().unwrap_or_else(resolve_data_dir);
        let store = match DocumentStore::open(&data_dir) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Failed to open document store: {e:#}");
                None
            }
        };

        let mut app = Self {
            session: EditorSession::new(),
            surface: MarkupBuffer::new(),
            theme_mode,
            font_size: app_config.font_size,
            placeholder_text: app_config.placeholder_text,
            auto_save_enabled: app_config.auto_save_enabled,
            auto_save_interval_secs: app_config.auto_save_interval_secs,
            last_auto_save: Instant::now(),
            default_export_extension: app_config.default_export_extension,
            remember_last_folder: app_config.remember_last_folder,
            last_used_folder: if app_config.last_used_folder.is_empty() {
                None
            } else {
                Some(PathBuf::from(app_config.last_used_folder))
            },
            reveal_after_export: app_config.reveal_after_export,
            available_themes: app_config.themes,
            config_path,
            store,
            pending_import: None,
            notices: Vec::new(),
            text_color: [0, 0, 0],
            highlight_color: [255, 255, 153],
            url_prompt: None,
            last_window_title: String::new(),
        };

        if !args.fresh {
            app.restore_saved_document();
        }

        // File requested via CLI argument replaces any restored content.
        if let Some(path) = &args.file {
            match rich_pad_core::io::import_file(path) {
                Ok(doc) => app.finish_import(doc),
                Err(e) => {
                    tracing::error!("Failed to open '{}': {e}", path.display());
                    app.notify(NoticeLevel::Error, e.to_string());
                }
            }
        }

        app
    }

    /// Loads the saved document from the store, if one exists.
    fn restore_saved_document(&mut self) {
        let Some(store) = &self.store else { return };
        let loaded = store.load_document();
        match loaded {
            Ok(Some(saved)) => {
                let file_name = saved
                    .file_name
                    .unwrap_or_else(|| rich_pad_core::session::DEFAULT_FILE_NAME.to_string());
                self.load_document(saved.content, file_name);
                if let Some(ts) = saved.saved_at_epoch_secs {
                    self.session.last_saved_at = chrono::DateTime::from_timestamp(ts, 0)
                        .map(|utc| utc.with_timezone(&chrono::Local));
                }
                tracing::info!("Restored saved document");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to restore saved document: {e:#}");
                self.notify(NoticeLevel::Error, "Failed to load saved content");
            }
        }
    }

    /// Replaces the session and surface with freshly loaded content.
    pub(crate) fn load_document(&mut self, markup: String, file_name: String) {
        let snapshot = Snapshot::from(markup);
        self.surface.apply_snapshot(&snapshot);
        self.session.load(snapshot, file_name);
    }

    /// Executes a formatting command and records the result.
    pub(crate) fn apply_format(&mut self, command: FormatCommand) {
        if let Err(e) = self.session.apply_command(&mut self.surface, &command) {
            tracing::warn!("Command '{}' failed: {e:#}", command.name());
            self.notify(NoticeLevel::Error, e.to_string());
        }
    }

    pub(crate) fn undo(&mut self) {
        self.session.undo(&mut self.surface);
    }

    pub(crate) fn redo(&mut self) {
        self.session.redo(&mut self.surface);
    }

    /// Posts a transient status notice.
    pub(crate) fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            message: message.into(),
            level,
            posted_at: Instant::now(),
        });
    }

    /// Drops notices older than their display window.
    fn prune_notices(&mut self) {
        self.notices.retain(|n| n.posted_at.elapsed() < NOTICE_TTL);
    }

    /// Applies egui visuals from a theme definition.
    fn apply_theme_visuals(ctx: &egui::Context, theme: &EditorTheme) {
        let c = |h: HexColor| -> Color32 { Color32::from_rgb(h.r, h.g, h.b) };
        let mut visuals = if theme.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = c(theme.background);
        visuals.window_fill = c(theme.background);
        visuals.faint_bg_color = c(theme.background);
        visuals.extreme_bg_color = c(theme.surface);
        visuals.override_text_color = Some(c(theme.text));
        visuals.hyperlink_color = c(theme.accent);
        visuals.selection.bg_fill = c(theme.accent).gamma_multiply(0.4);
        visuals.widgets.noninteractive.bg_stroke.color = c(theme.border);
        visuals.window_stroke.color = c(theme.border);

        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::Vec2::new(6.0, 6.0);
            style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
        });
    }

    /// Switches to a new theme mode and applies it.
    pub(crate) fn set_theme_mode(&mut self, mode: ThemeMode, ctx: &egui::Context) {
        self.theme_mode = mode;
        let resolved_name = self.theme_mode.resolve().to_string();
        let theme = match self
            .available_themes
            .iter()
            .find(|t| t.name == resolved_name)
            .cloned()
        {
            Some(def) => def,
            None => {
                tracing::warn!("Theme '{}' not found, falling back to System", resolved_name);
                self.theme_mode = ThemeMode::system();
                let fallback_name = self.theme_mode.resolve().to_string();
                self.available_themes
                    .iter()
                    .find(|t| t.name == fallback_name)
                    .cloned()
                    .unwrap_or_else(builtin_default)
            }
        };
        Self::apply_theme_visuals(ctx, &theme);
    }

    /// Updates the OS window title to show the document name.
    ///
    /// Only sends the viewport command when the title actually changes.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if title != self.last_window_title {
            self.last_window_title.clone_from(&title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }

    fn window_title(&self) -> String {
        let modified_marker = if self.session.modified { " *" } else { "" };
        format!("{}{modified_marker} - rich-pad", self.session.file_name)
    }

    /// Saves the document to the store on the auto-save timer.
    fn auto_save(&mut self) {
        if !self.session.modified {
            return;
        }
        let Some(store) = &self.store else { return };
        match store.save_document(self.surface.text(), &self.session.file_name) {
            Ok(()) => {
                self.session.mark_saved();
                tracing::debug!("Auto-saved document");
            }
            Err(e) => tracing::warn!("Auto-save failed: {e:#}"),
        }
    }

    /// Shows the link/image URL prompt when active.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        let Some(prompt) = &mut self.url_prompt else {
            return;
        };
        let title = match prompt.kind {
            UrlPromptKind::Link => "Insert Link",
            UrlPromptKind::Image => "Insert Image",
        };

        let mut open = true;
        let mut action: Option<bool> = None;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut prompt.url)
                        .hint_text("https://…")
                        .desired_width(280.0),
                );
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("  Insert  ").clicked() {
                        action = Some(true);
                    }
                    if ui.button("  Cancel  ").clicked() {
                        action = Some(false);
                    }
                });
            });

        match action {
            Some(true) => {
                if let Some(prompt) = self.url_prompt.take() {
                    let command = match prompt.kind {
                        UrlPromptKind::Link => FormatCommand::Link(prompt.url),
                        UrlPromptKind::Image => FormatCommand::Image(prompt.url),
                    };
                    self.apply_format(command);
                }
            }
            Some(false) => self.url_prompt = None,
            None => {
                if !open {
                    self.url_prompt = None;
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending_import();
        self.handle_shortcuts(ctx);
        self.update_window_title(ctx);
        self.prune_notices();

        let panel_fill = ctx.style().visuals.panel_fill;
        let extreme_bg = ctx.style().visuals.extreme_bg_color;

        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                self.show_toolbar(ui, ctx);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(extreme_bg)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                self.show_editor(ui);
            });

        self.show_dialogs(ctx);

        if self.auto_save_enabled
            && self.last_auto_save.elapsed() >= Duration::from_secs(self.auto_save_interval_secs)
        {
            self.auto_save();
            self.last_auto_save = Instant::now();
        }

        // Keep repainting while short-lived state (notices, a pending
        // file read) needs to resolve on screen.
        let next_repaint = if self.pending_import.is_some() || !self.notices.is_empty() {
            Duration::from_millis(200)
        } else if self.auto_save_enabled {
            Duration::from_secs(1)
        } else {
            Duration::from_secs(30)
        };
        ctx.request_repaint_after(next_repaint);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.auto_save_enabled {
            self.auto_save();
        }

        let config = AppConfig {
            current_theme: self.theme_mode.0.clone(),
            font_size: self.font_size,
            placeholder_text: self.placeholder_text.clone(),
            auto_save_enabled: self.auto_save_enabled,
            auto_save_interval_secs: self.auto_save_interval_secs,
            default_export_extension: self.default_export_extension.clone(),
            remember_last_folder: self.remember_last_folder,
            last_used_folder: self
                .last_used_folder
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            reveal_after_export: self.reveal_after_export,
            themes: self.available_themes.clone(),
        };
        if let Err(e) = config.save(&self.config_path) {
            tracing::warn!("Failed to save config on exit: {e}");
        }
    }
}
