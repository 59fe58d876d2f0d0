use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use eframe::egui::{self, Align2, Color32, FontId, Key, Modifiers, RichText, Stroke};
use tracing::{debug, warn};

use ai_tools::client::{HttpTransport, Transport};
use ai_tools::config::Config;
use ai_tools_common::{
    ArticleScreen, ChartData, ImageScreen, SentimentScreen, Settle, Submission, ToolError,
};

use crate::io::{load_image, pick_image};
use crate::model::{PreviewData, Tab, UiMessage};

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 80, 80);
const BAR_COLOR: Color32 = Color32::from_rgba_premultiplied(45, 115, 115, 153);

pub struct DesktopApp {
    tab: Tab,
    article: ArticleScreen,
    sentiment: SentimentScreen,
    image: ImageScreen,
    preview: Option<egui::TextureHandle>,
    pending_preview: Option<PreviewData>,
    image_status: String,
    transport: Arc<HttpTransport>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<UiMessage>,
    rx: Receiver<UiMessage>,
}

impl DesktopApp {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config, None)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("start async runtime")?;
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            tab: Tab::default(),
            article: ArticleScreen::new(),
            sentiment: SentimentScreen::new(),
            image: ImageScreen::new(),
            preview: None,
            pending_preview: None,
            image_status: String::new(),
            transport: Arc::new(transport),
            runtime,
            tx,
            rx,
        })
    }

    fn spawn_submission(&self, ctx: &egui::Context, tab: Tab, submission: Submission) {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = transport.send(&submission).await;
            let _ = tx.send(UiMessage::Completed {
                tab,
                ticket: submission.ticket,
                outcome,
            });
            ctx.request_repaint();
        });
    }

    fn submit(&mut self, ctx: &egui::Context, tab: Tab) {
        // Pending への遷移はここで同期的に済ませてから送信する
        let started = match tab {
            Tab::Article => self.article.begin_submit(),
            Tab::Sentiment => self.sentiment.begin_submit(),
            Tab::Image => self.image.begin_submit(),
        };
        match started {
            Ok(Some(submission)) => self.spawn_submission(ctx, tab, submission),
            Ok(None) => {}
            Err(err) => debug!(?tab, error = %err, "submit blocked"),
        }
    }

    fn poll_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            let UiMessage::Completed { tab, ticket, outcome } = msg;
            let settle = match tab {
                Tab::Article => self.article.complete(ticket, outcome),
                Tab::Sentiment => self.sentiment.complete(ticket, outcome),
                Tab::Image => self.image.complete(ticket, outcome),
            };
            if settle == Settle::Stale {
                debug!(?tab, generation = ticket.generation(), "stale response ignored");
            }
        }
    }

    fn is_any_loading(&self) -> bool {
        self.article.is_loading() || self.sentiment.is_loading() || self.image.is_loading()
    }

    fn choose_image(&mut self) {
        let Some(path) = pick_image() else {
            return;
        };
        match load_image(&path) {
            Ok((blob, preview)) => {
                self.image_status = format!("{} ({} bytes)", blob.file_name, blob.len());
                self.image.input_mut().hold(blob);
                self.pending_preview = Some(preview);
                self.preview = None;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "image load failed");
                self.image_status = format!("Load failed: {err:#}");
            }
        }
    }

    fn process_pending_preview(&mut self, ctx: &egui::Context) {
        let Some(data) = self.pending_preview.take() else {
            return;
        };
        if data.size[0] == 0 || data.size[1] == 0 {
            return;
        }
        let color_image = egui::ColorImage::from_rgba_unmultiplied(data.size, &data.pixels);
        self.preview = Some(ctx.load_texture("image_preview", color_image, egui::TextureOptions::default()));
    }

    fn reset_image(&mut self) {
        self.image.reset();
        self.preview = None;
        self.pending_preview = None;
        self.image_status.clear();
    }

    fn render_article(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Classification of Articles");
        ui.add_space(8.0);
        render_error(ui, self.article.error());

        let count = self.article.input().len();
        let mut remove = None;
        let mut submit = false;

        egui::ScrollArea::vertical()
            .id_source("article_inputs")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                for index in 0..count {
                    ui.label(RichText::new(format!("Article {}", index + 1)).strong());
                    let id = ui.make_persistent_id(("article_input", index));
                    if ui.memory(|m| m.has_focus(id))
                        && ui.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Enter))
                    {
                        submit = true;
                    }
                    if let Some(text) = self.article.input_mut().get_mut(index) {
                        ui.add(
                            egui::TextEdit::multiline(text)
                                .id(id)
                                .hint_text(format!("Enter article {}", index + 1))
                                .desired_rows(4)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    if ui.add_enabled(count > 1, egui::Button::new("Remove")).clicked() {
                        remove = Some(index);
                    }
                    ui.add_space(6.0);
                }
            });

        if let Some(index) = remove {
            self.article.input_mut().remove(index);
        }

        ui.horizontal(|ui| {
            if ui.button("Add Article Field").clicked() {
                self.article.input_mut().append();
            }
            let loading = self.article.is_loading();
            if ui.add_enabled(!loading, egui::Button::new("Submit")).clicked() {
                submit = true;
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
            if ui.button("Reset").clicked() {
                self.article.reset();
            }
        });

        if submit && !self.article.is_loading() {
            self.submit(ctx, Tab::Article);
        }

        ui.separator();
        ui.heading("Predicted Categories");
        match self.article.result() {
            Some(predictions) if !predictions.is_empty() => {
                for prediction in predictions {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("Article {}:", prediction.number)).strong());
                        ui.label(&prediction.category);
                    });
                }
            }
            _ => {
                ui.label("No results yet");
            }
        }
    }

    fn render_sentiment(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Sentiment Analysis");
        ui.add_space(8.0);
        render_error(ui, self.sentiment.error());

        let id = ui.make_persistent_id("sentiment_input");
        let mut submit = ui.memory(|m| m.has_focus(id))
            && ui.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Enter));
        ui.add(
            egui::TextEdit::multiline(self.sentiment.input_mut())
                .id(id)
                .hint_text("Enter your text here...")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );

        let loading = self.sentiment.is_loading();
        ui.horizontal(|ui| {
            if ui.add_enabled(!loading, egui::Button::new("Analyze")).clicked() {
                submit = true;
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
            if ui.button("Reset").clicked() {
                self.sentiment.reset();
            }
        });

        if submit && !loading {
            self.submit(ctx, Tab::Sentiment);
        }

        if loading {
            return;
        }
        if let Some(view) = self.sentiment.result() {
            ui.add_space(12.0);
            ui.heading(format!("Sentiment: {}", view.sentiment));
            ui.label(RichText::new(format!("Polarity: {}", view.polarity_text)).size(16.0));
            ui.add_space(8.0);
            draw_polarity_chart(ui, &view.chart);
        }
    }

    fn render_image(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Image Classification");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Upload Image").clicked() {
                self.choose_image();
            }
            if !self.image_status.is_empty() {
                ui.label(RichText::new(&self.image_status).color(Color32::from_gray(170)));
            }
        });

        if let Some(texture) = &self.preview {
            ui.add(egui::Image::new(texture).max_width(360.0));
        }

        let loading = self.image.is_loading();
        ui.horizontal(|ui| {
            let label = if loading { "Classifying..." } else { "Classify Image" };
            if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                self.submit(ctx, Tab::Image);
            }
            if ui.button("Reset").clicked() {
                self.reset_image();
            }
        });

        render_error(ui, self.image.error());

        if let Some(predictions) = self.image.result() {
            if !predictions.is_empty() {
                ui.add_space(8.0);
                ui.heading("Predictions:");
                for view in predictions {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}:", view.label)).strong());
                        ui.label(format!("{} - {}%", view.description, view.percent_text));
                    });
                }
            }
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();
        self.process_pending_preview(ctx);
        if self.is_any_loading() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.tab, tab, tab.label());
                }
                ui.separator();
                ui.label(RichText::new(self.transport.base_url()).color(Color32::from_gray(150)));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Article => self.render_article(ui, ctx),
            Tab::Sentiment => self.render_sentiment(ui, ctx),
            Tab::Image => self.render_image(ui, ctx),
        });
    }
}

fn render_error(ui: &mut egui::Ui, error: Option<&ToolError>) {
    if let Some(err) = error {
        ui.colored_label(ERROR_COLOR, err.to_string());
        ui.add_space(6.0);
    }
}

/// -1〜1 の値1本だけの棒グラフ
fn draw_polarity_chart(ui: &mut egui::Ui, chart: &ChartData) {
    let size = egui::vec2(ui.available_width().min(360.0), 200.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();

    painter.text(
        rect.center_top(),
        Align2::CENTER_TOP,
        &chart.title,
        FontId::proportional(14.0),
        text_color,
    );

    let plot = egui::Rect::from_min_max(
        rect.min + egui::vec2(32.0, 24.0),
        rect.max - egui::vec2(8.0, 20.0),
    );
    let zero_y = plot.center().y;
    let half = plot.height() / 2.0;

    for (value, label) in [(1.0_f32, "1"), (0.0, "0"), (-1.0, "-1")] {
        let y = zero_y - value * half;
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, Color32::from_gray(if value == 0.0 { 140 } else { 70 })),
        );
        painter.text(
            egui::pos2(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            label,
            FontId::proportional(11.0),
            text_color,
        );
    }

    let value = chart.data.first().copied().unwrap_or_default().clamp(-1.0, 1.0) as f32;
    let top = zero_y - value * half;
    let bar = egui::Rect::from_x_y_ranges(
        plot.center().x - 30.0..=plot.center().x + 30.0,
        top.min(zero_y)..=top.max(zero_y),
    );
    painter.rect_filled(bar, 0.0, BAR_COLOR);

    let label = chart.labels.first().map(String::as_str).unwrap_or_default();
    painter.text(
        egui::pos2(plot.center().x, plot.bottom() + 4.0),
        Align2::CENTER_TOP,
        label,
        FontId::proportional(12.0),
        text_color,
    );
}
