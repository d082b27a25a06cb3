use crate::{
    Drawable, Painter, Pipe, ProcessConfig, Pump, StartError, Tank, TickTimer, layout,
};
use gems::{RangeF64, RescaleExt};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TankId {
    /// Source tank, filled by the start command
    T1,
    /// Intermediate tank fed by the pump
    T2,
    T3,
    T4,
}

impl TankId {
    pub const ALL: [TankId; 4] = [TankId::T1, TankId::T2, TankId::T3, TankId::T4];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeId {
    /// T1 to T2 through the pump
    Feed,
    /// T2 to T3
    SplitLeft,
    /// T2 to T4
    SplitRight,
}

impl PipeId {
    pub const ALL: [PipeId; 3] = [PipeId::Feed, PipeId::SplitLeft, PipeId::SplitRight];

    fn index(self) -> usize {
        self as usize
    }
}

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Quantity taken out of T1 if the feed stage ran
    pub feed: Option<f64>,

    /// Quantity handed over to T3 and T4 together
    pub split: f64,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.feed.is_none() && self.split <= 0.
    }
}

/// The whole process: four tanks, three pipes and a pump, plus the run state and the tick
/// timer driving it.
///
/// All mutation goes through [`start`](Self::start), [`tick`](Self::tick) and
/// [`reset`](Self::reset). Rendering is a separate read-only pass.
pub struct ProcessView {
    tanks: [Tank; 4],
    pipes: [Pipe; 3],
    pump: Pump,
    level: f64,
    speed: f64,
    state: RunState,
    timer: TickTimer,
    redraw_requested: bool,
}

impl Default for ProcessView {
    fn default() -> Self {
        Self::new(&ProcessConfig::default())
    }
}

impl ProcessView {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            tanks: layout::tanks(),
            pipes: layout::pipes(),
            pump: layout::pump(config.pump_angle_per_speed),
            level: 0.,
            speed: 0.,
            state: RunState::Idle,
            timer: TickTimer::new(config.tick_interval()),
            redraw_requested: true,
        }
    }

    pub fn tank(&self, id: TankId) -> &Tank {
        &self.tanks[id.index()]
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn pipe(&self, id: PipeId) -> &Pipe {
        &self.pipes[id.index()]
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn pump(&self) -> &Pump {
        &self.pump
    }

    /// Level applied to T1 by the last accepted start command
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Parses both inputs and starts the process.
    ///
    /// The level is limited to [0, capacity] and overwrites the content of T1. On error
    /// nothing changes and the timer is not started.
    pub fn start(
        &mut self,
        level_text: &str,
        speed_text: &str,
        now: Instant,
    ) -> Result<(), StartError> {
        let speed = parse_speed(speed_text)?;
        let level = parse_level(level_text)?;

        let capacity = self.tanks[TankId::T1.index()].capacity();
        // a NaN level fills the tank completely
        let level = if level.is_nan() {
            capacity
        } else {
            level.clamp_to(&RangeF64::new(0., capacity))
        };
        self.level = level;
        self.speed = speed;
        self.tanks[TankId::T1.index()].set_quantity(level);

        self.state = RunState::Running;
        self.timer.start(now);
        self.redraw_requested = true;

        log::info!("process started: level={level}, speed={speed}");

        Ok(())
    }

    /// Stops the timer and drains everything. The pump keeps its angle.
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.timer.stop();

        for tank in self.tanks.iter_mut() {
            tank.empty();
        }
        for pipe in self.pipes.iter_mut() {
            pipe.set_flowing(false);
        }

        self.redraw_requested = true;

        log::info!("process reset");
    }

    /// Runs a tick if the timer is due
    pub fn poll(&mut self, now: Instant) -> Option<TickReport> {
        if self.timer.fire(now) {
            Some(self.tick())
        } else {
            None
        }
    }

    /// One step of the transfer logic. Does nothing while idle.
    pub fn tick(&mut self) -> TickReport {
        if !self.is_running() {
            return TickReport::default();
        }

        let speed = self.speed;
        let [t1, t2, t3, t4] = &mut self.tanks;
        let mut report = TickReport::default();

        // Feed: T1 -> T2 through the pump. T2 does not give back what it cannot take.
        if !t1.is_empty() && !t2.is_full() {
            let taken = t1.remove(speed);
            t2.add(taken);
            self.pump.advance(speed);
            report.feed = Some(taken);
        }
        self.pipes[PipeId::Feed.index()].set_flowing(report.feed.is_some());

        // Split: T2 -> T3 and T4 in equal parts
        if !t2.is_empty() {
            let given = t3.add(0.5 * speed) + t4.add(0.5 * speed);
            if given > 0. {
                t2.remove(given);
                report.split = given;
            }
        }
        let splitting = report.split > 0.;
        self.pipes[PipeId::SplitLeft.index()].set_flowing(splitting);
        self.pipes[PipeId::SplitRight.index()].set_flowing(splitting);

        self.redraw_requested = true;

        log::trace!(
            "tick: {:?} T1={:.2} T2={:.2} T3={:.2} T4={:.2}",
            report,
            t1.quantity(),
            t2.quantity(),
            t3.quantity(),
            t4.quantity()
        );

        report
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Returns true once for every batch of redraw requests
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Drawable for ProcessView {
    fn draw(&self, painter: &mut dyn Painter) {
        for pipe in self.pipes.iter() {
            pipe.draw(painter);
        }
        self.pump.draw(painter);
        for tank in self.tanks.iter() {
            tank.draw(painter);
        }
    }
}

fn parse_speed(text: &str) -> Result<f64, StartError> {
    match text.trim().parse::<f64>() {
        Ok(speed) if speed.is_finite() => Ok(speed),
        Ok(_) => Err(StartError::InvalidSpeed {
            text: text.to_string(),
            source: None,
        }),
        Err(err) => Err(StartError::InvalidSpeed {
            text: text.to_string(),
            source: Some(err),
        }),
    }
}

fn parse_level(text: &str) -> Result<f64, StartError> {
    text.trim()
        .parse::<f64>()
        .map_err(|err| StartError::InvalidLevel {
            text: text.to_string(),
            source: err,
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_speed("-1").unwrap(), -1.);
        assert!(matches!(
            parse_speed("abc"),
            Err(StartError::InvalidSpeed { source: Some(_), .. })
        ));
        assert!(matches!(
            parse_speed("inf"),
            Err(StartError::InvalidSpeed { source: None, .. })
        ));
        assert!(parse_speed("").is_err());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("150").unwrap(), 150.);
        assert_eq!(parse_level("inf").unwrap(), f64::INFINITY);
        assert!(parse_level("NaN").unwrap().is_nan());
        assert!(matches!(
            parse_level("x"),
            Err(StartError::InvalidLevel { .. })
        ));
        assert!(parse_level("1,5").is_err());
    }

    #[test]
    fn test_nan_level_fills_source_tank() {
        let mut view = ProcessView::default();
        view.start("nan", "1", Instant::now()).unwrap();
        assert_eq!(view.level(), 100.);
        assert_eq!(view.tank(TankId::T1).quantity(), 100.);
        assert!(view.is_running());
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut view = ProcessView::default();
        let report = view.tick();
        assert!(report.is_idle());
        assert!(TankId::ALL.iter().all(|&id| view.tank(id).is_empty()));
        assert!(PipeId::ALL.iter().all(|&id| !view.pipe(id).is_flowing()));
    }

    #[test]
    fn test_redraw_request_is_consumed() {
        let mut view = ProcessView::default();
        assert!(view.take_redraw_request());
        assert!(!view.take_redraw_request());
        view.request_redraw();
        assert!(view.take_redraw_request());
    }
}
