//! Plot the outputs of the modulation engine while a gate comes and goes
//!
//! Look in /images/ for the resulting plot.
//!
//! Requires plotters lib: https://docs.rs/plotters/latest/plotters/.

use modulation_core::{
    config::{ConfigSaver, ConfigStore, SaveScheduler},
    engine::{Engine, TICK_RATE_HZ},
    flash::SimulatedFlash,
    io::{ControlInputs, ModeLed, Outputs, RegisterMap},
    routing::{Axis, RoutingMode, RoutingSettings},
};
use plotters::prelude::*;

/// A panel with the knobs left where the demo puts them
#[derive(Default)]
struct DemoPanel {
    inputs: ControlInputs,
    outputs: Outputs,
}

impl RegisterMap for DemoPanel {
    fn read_inputs(&mut self) -> ControlInputs {
        self.inputs
    }

    fn write_outputs(&mut self, outputs: &Outputs) {
        self.outputs = *outputs;
    }

    fn set_mode_led(&mut self, led: ModeLed, lit: bool) {
        if lit {
            println!("LFO {} {:?} LED on: {:?}", led.lfo, led.axis, led.mode);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let saves = SaveScheduler::new();

    // restore the routing from a store that was saved to on a previous "boot"
    let flash = SimulatedFlash::<2048, 4>::new(0x0800_0000, 99);
    let layout = flash.layout();
    let mut routing = RoutingSettings::default();
    routing.set_mode(0, Axis::Level, RoutingMode::Swell);
    routing.set_mode(1, Axis::Rate, RoutingMode::Ramp);

    let mut store = ConfigStore::new(flash, layout, &saves, &[&routing]).map_err(|e| e.to_string())?;
    store
        .restore_config(&mut [&mut routing as &mut dyn ConfigSaver])
        .map_err(|e| e.to_string())?;
    store.save_config(&[&routing], 0, true).map_err(|e| e.to_string())?;

    let mut restored = RoutingSettings::default();
    store
        .restore_config(&mut [&mut restored as &mut dyn ConfigSaver])
        .map_err(|e| e.to_string())?;

    let mut engine = Engine::new();
    let mut panel = DemoPanel::default();
    engine.apply_routing_settings(&restored);
    engine.init(&mut panel);

    panel.inputs.lfo_rate = [1_400, 1_200, 2_600];
    panel.inputs.lfo_level = [4_095, 3_000, 4_095];
    panel.inputs.ramp_rate = 300;
    panel.inputs.ramp_level = 4_095;
    panel.inputs.swell_rate = 200;
    panel.inputs.swell_level = 3_500;

    // plot 4 seconds with the gate high for the first 2, one point per millisecond
    let seconds = 4;
    let ticks_per_point = TICK_RATE_HZ / 1_000;
    let num_points = seconds * 1_000;

    let mut points: Vec<Outputs> = Vec::with_capacity(num_points as usize);
    for ms in 0..num_points {
        panel.inputs.gate = ms < num_points / 2;
        for _ in 0..ticks_per_point {
            engine.tick(&mut panel, ms, &saves);
        }
        points.push(panel.outputs);
    }

    std::fs::create_dir_all("images")?;
    let root = BitMapBackend::new("images/modulation_plot.png", (800, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Modulation Outputs", ("sans-serif", 40))?;

    let sub_areas = root.split_evenly((3, 1));

    let details: [(&str, [(fn(&Outputs) -> u16, RGBColor); 2]); 3] = [
        (
            "Ramp (red) and swell (blue)",
            [(|o: &Outputs| o.ramp_dac, RED), (|o: &Outputs| o.swell_dac, BLUE)],
        ),
        (
            "LFO 1 (red), level follows swell, and LFO 3 (blue)",
            [(|o: &Outputs| o.lfo_dac[0], RED), (|o: &Outputs| o.lfo_dac[2], BLUE)],
        ),
        (
            "LFO 2 (red) and its FM output (blue), rate follows ramp",
            [
                (|o: &Outputs| o.lfo_dac[1], RED),
                (|o: &Outputs| o.fm_dac[1].unwrap_or(0), BLUE),
            ],
        ),
    ];

    for (area, (caption, series)) in sub_areas.iter().zip(details.iter()) {
        let mut chart = ChartBuilder::on(area)
            .caption(*caption, ("sans-serif", 15).into_font())
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(0f32..seconds as f32, 0f32..4_200f32)?;

        chart
            .configure_mesh()
            .x_desc("Time")
            .y_desc("DAC")
            .draw()?;

        for (value, color) in series.iter() {
            chart.draw_series(LineSeries::new(
                points
                    .iter()
                    .enumerate()
                    .map(|(x, o)| (x as f32 / 1_000.0, value(o) as f32)),
                color,
            ))?;
        }
    }

    root.present()?;

    Ok(())
}
