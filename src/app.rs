//! AI Text Corrector window: egui/eframe application.
//!
//! # Architecture
//!
//! [`CorrectorApp`] is the top-level [`eframe::App`].  It owns the
//! [`CorrectionOrchestrator`] and one channel pair:
//!
//! * `outcome_tx`: handed to each spawned correction task.
//! * `outcome_rx`: drained every frame; outcomes go to
//!   [`CorrectionOrchestrator::finish_submit`].
//!
//! Network calls run on the tokio runtime; every state change happens on the
//! UI thread.
//!
//! # Layout
//!
//! | Area | Content |
//! |------|---------|
//! | Top bar | download button, theme toggle |
//! | Header | title + subtitle |
//! | "Texto Original" | editor, "Corregir Texto" button / spinner |
//! | "Texto Corregido" | result + "Copiar"/"Copiado" (only with a result) |
//! | Bottom-right | toasts |

use std::time::{Duration, Instant};

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::{AppConfig, SettingsFile, Theme};
use crate::notify::{Toast, ToastQueue};
use crate::orchestrator::{CorrectionOrchestrator, CorrectionOutcome};

const INPUT_ID: &str = "input_text";

// ---------------------------------------------------------------------------
// CorrectorApp
// ---------------------------------------------------------------------------

/// eframe application: the corrector window.
pub struct CorrectorApp {
    orchestrator: CorrectionOrchestrator,
    toasts: ToastQueue,

    // ── Async plumbing ───────────────────────────────────────────────────
    runtime: tokio::runtime::Handle,
    outcome_tx: mpsc::Sender<CorrectionOutcome>,
    outcome_rx: mpsc::Receiver<CorrectionOutcome>,

    // ── Configuration ────────────────────────────────────────────────────
    config: AppConfig,
    settings: SettingsFile,
}

impl CorrectorApp {
    /// Create a new [`CorrectorApp`].
    ///
    /// * `orchestrator`: built with `toasts` as its notifier.
    /// * `toasts`: the queue rendered in the bottom-right corner.
    /// * `runtime`: where correction requests are spawned.
    /// * `config`: loaded application configuration.
    /// * `settings`: where theme changes are saved.
    pub fn new(
        orchestrator: CorrectionOrchestrator,
        toasts: ToastQueue,
        runtime: tokio::runtime::Handle,
        config: AppConfig,
        settings: SettingsFile,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(4);
        Self {
            orchestrator,
            toasts,
            runtime,
            outcome_tx,
            outcome_rx,
            config,
            settings,
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Start a correction if the orchestrator accepts one.
    fn dispatch(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.orchestrator.begin_submit() else {
            return;
        };

        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = pending.run().await;
            if tx.send(outcome).await.is_err() {
                log::warn!("Correction finished after the window closed");
            }
            ctx.request_repaint();
        });
    }

    /// Drain all finished corrections (non-blocking).
    fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.orchestrator.finish_submit(outcome);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.ui.theme = self.config.ui.theme.toggled();
        apply_theme(ctx, self.config.ui.theme);
        if let Err(e) = self.settings.save(&self.config) {
            log::warn!("Failed to save theme preference: {e}");
        }
    }

    // ── Panels ───────────────────────────────────────────────────────────

    fn draw_top_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_label = match self.config.ui.theme {
                Theme::Light => "Tema oscuro",
                Theme::Dark => "Tema claro",
            };
            if ui.button(theme_label).clicked() {
                self.toggle_theme(ctx);
            }
            if ui.button("Descargar versión Python").clicked() {
                self.orchestrator.download_reference();
            }
        });
    }

    fn draw_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("AI Text Corrector")
                    .size(32.0)
                    .strong()
                    .color(ui.visuals().hyperlink_color),
            );
            ui.label(
                egui::RichText::new(
                    "Corrige la gramática y sintaxis de tus textos en español con inteligencia artificial",
                )
                .size(15.0)
                .weak(),
            );
            ui.add_space(16.0);
        });
    }

    fn draw_input(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        card(ui, |ui| {
            ui.label(egui::RichText::new("Texto Original").size(18.0).strong());
            ui.label(egui::RichText::new("Ingresa el texto que deseas corregir").weak());
            ui.add_space(8.0);

            // Ctrl/Cmd+Enter submits; consume it before the editor turns it
            // into a newline.
            let id = egui::Id::new(INPUT_ID);
            let shortcut = ui.memory(|m| m.has_focus(id))
                && ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));

            let mut text = self.orchestrator.input().to_owned();
            let response = ui.add(
                egui::TextEdit::multiline(&mut text)
                    .id(id)
                    .hint_text("Escribe o pega tu texto aquí...")
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.orchestrator.set_input(text);
            }

            ui.add_space(8.0);
            let clicked = if self.orchestrator.status().is_busy() {
                ui.horizontal(|ui| {
                    ui.add_enabled(false, egui::Button::new("Corrigiendo..."));
                    ui.add(egui::Spinner::new());
                });
                false
            } else {
                ui.add_enabled(
                    self.orchestrator.can_submit(),
                    egui::Button::new(egui::RichText::new("Corregir Texto").size(15.0)),
                )
                .clicked()
            };

            if clicked || shortcut {
                self.dispatch(ctx);
            }
        });
    }

    fn draw_result(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.orchestrator.result().map(str::to_owned) else {
            return;
        };

        ui.add_space(16.0);
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Texto Corregido")
                            .size(18.0)
                            .strong()
                            .color(ui.visuals().hyperlink_color),
                    );
                    ui.label(egui::RichText::new("Resultado de la corrección con IA").weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.orchestrator.copy_feedback_active() {
                        "Copiado"
                    } else {
                        "Copiar"
                    };
                    if ui.button(label).clicked() {
                        self.orchestrator.copy_result();
                    }
                });
            });
            ui.add_space(8.0);
            egui::Frame::new()
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(egui::Label::new(egui::RichText::new(result).size(15.0)).selectable(true));
                });
        });
    }

    fn draw_toasts(&self, ctx: &egui::Context) {
        let visible = self.toasts.visible();
        if visible.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &visible {
                    self.draw_toast(ui, toast);
                    ui.add_space(6.0);
                }
            });
    }

    fn draw_toast(&self, ui: &mut egui::Ui, toast: &Toast) {
        let (fill, text) = if toast.notification.is_destructive() {
            (egui::Color32::from_rgb(185, 28, 28), egui::Color32::WHITE)
        } else {
            (ui.visuals().window_fill, ui.visuals().text_color())
        };

        egui::Frame::new()
            .fill(fill)
            .stroke(ui.visuals().window_stroke)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_max_width(320.0);
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&toast.notification.title)
                                .strong()
                                .color(text),
                        );
                        ui.label(egui::RichText::new(&toast.notification.description).color(text));
                    });
                    if ui
                        .add(egui::Button::new(egui::RichText::new("x").color(text)).frame(false))
                        .clicked()
                    {
                        self.toasts.dismiss(toast.id);
                    }
                });
            });
    }

    /// Repaint when the next timer (copy feedback, toast) runs out.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let next = [
            self.orchestrator.copy_feedback_remaining(now),
            self.toasts.next_expiry(now),
        ]
        .into_iter()
        .flatten()
        .min();

        if let Some(delay) = next {
            ctx.request_repaint_after(delay + Duration::from_millis(10));
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Rounded, padded group used for both cards.
fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// Switch egui's visuals to `theme`.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    });
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for CorrectorApp {
    /// Called every frame by eframe.  Applies finished requests, advances
    /// timers, then renders the window.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_outcomes();

        let now = Instant::now();
        self.orchestrator.tick(now);
        self.toasts.prune(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(900.0);
                self.draw_top_bar(ui, ctx);
                self.draw_header(ui);
                self.draw_input(ui, ctx);
                self.draw_result(ui);
            });
        });

        self.draw_toasts(ctx);
        self.schedule_repaint(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("AI Text Corrector closing");
    }
}
