use eframe::egui::{Align2, Color32, RichText, ScrollArea, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, Text};

use jke_utilities::figure::model::{Figure, Subplot};
use jke_utilities::FontWeight;

use crate::state::AppState;

/// Screen pixels per figure height unit.
const PX_PER_UNIT: f32 = 80.0;

// ---------------------------------------------------------------------------
// Stacked sub-plots (central panel)
// ---------------------------------------------------------------------------

/// Render the current figure in the central panel.
pub fn figure_view(ui: &mut Ui, state: &AppState) {
    let figure = match &state.figure {
        Some(fig) if !fig.is_empty() => fig,
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Nothing to plot");
            });
            return;
        }
    };

    let plot_height = figure_plot_height(figure);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, subplot) in figure.subplots.iter().enumerate() {
                subplot_view(ui, i, subplot, plot_height);
            }
        });
}

fn figure_plot_height(figure: &Figure) -> f32 {
    (figure.height / figure.len() as f32) * PX_PER_UNIT
}

fn subplot_view(ui: &mut Ui, index: usize, subplot: &Subplot, height: f32) {
    let (x0, x1) = subplot.x_lim;
    let (y0, y1) = subplot.y_lim;

    Plot::new(("subplot", index))
        .height(height)
        .legend(egui_plot::Legend::default())
        .x_axis_label(subplot.x_label.as_str())
        .y_axis_label(subplot.y_label.as_str())
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // Limits are shared by every sub-plot; pin them each frame.
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));

            for series in &subplot.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .copied()
                    .filter(|[x, y]| x.is_finite() && y.is_finite())
                    .collect();

                let line = Line::new(points)
                    .name(&series.name)
                    .color(Color32::from_rgb(series.color.0, series.color.1, series.color.2))
                    .width(series.width);

                plot_ui.line(line);
            }

            let style = subplot.title_style;
            let mut title = RichText::new(&subplot.title).size(style.font_size);
            if style.font_weight == FontWeight::Bold {
                title = title.strong();
            }
            let [ax, ay] = subplot.title_anchor();
            plot_ui.text(Text::new(PlotPoint::new(ax, ay), title).anchor(Align2::LEFT_TOP));
        });

    ui.add_space(4.0);
}
