//! Animations-Verwaltung der eingeblendeten Trefferbereiche.
//!
//! Pro Radius existiert höchstens ein Animations-Zustand mit Deckkraft,
//! Phase und zugehörigen Punkten. Einblenden, Halten und Ausblenden laufen
//! über eine explizite Tick-Kette pro Schlüssel (`FadeTask`), die vom
//! Frame-Loop mit `tick(now)` vorangetrieben wird. Das Rendering liest den
//! Zustand nur — Mutation geschieht ausschließlich hier.

use std::time::{Duration, Instant};

use indexmap::IndexMap;

use super::region::Radius;

/// Deckkraft-Schritt pro Fade-Tick.
pub const FADE_STEP: f32 = 0.05;
/// Abstand zweier Fade-Ticks.
pub const FADE_TICK_PERIOD: Duration = Duration::from_millis(50);
/// Haltedauer bei voller Deckkraft, bevor das Ausblenden beginnt.
pub const HOLD_DURATION: Duration = Duration::from_millis(3000);
/// Maximal gleichzeitig sichtbare Trefferbereiche.
pub const MAX_ACTIVE_REGIONS: usize = 5;

/// Phase einer Bereichs-Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Deckkraft steigt bis 1
    FadingIn,
    /// Volle Deckkraft, Halte-Frist läuft
    Visible,
    /// Deckkraft sinkt bis 0, danach wird der Eintrag entfernt
    FadingOut,
}

/// Ein geprüfter Punkt auf dem Plot.
///
/// Unveränderlich; gehört exklusiv der Punktliste seines
/// Animations-Zustands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Mathe-X
    pub x: f32,
    /// Mathe-Y
    pub y: f32,
    /// Urteil des Auswertungsdiensts
    pub accepted: bool,
}

/// Tick-Verwaltung eines Schlüssels: nächste Fälligkeit plus Halte-Frist.
///
/// Liegt am Zustand selbst, damit Eviction und `clear` die Kette
/// zwangsläufig mit entfernen.
#[derive(Debug, Clone, Copy)]
struct FadeTask {
    /// Fälligkeit des nächsten Fade-Ticks
    next_tick: Instant,
    /// Ende der Haltephase (nur in `Visible` gesetzt)
    hold_until: Option<Instant>,
}

/// Animations-Zustand eines Radius.
#[derive(Debug)]
pub struct RegionAnimation {
    /// Aktuelle Deckkraft in `[0, 1]`
    pub opacity: f32,
    /// Aktuelle Phase
    pub phase: FadePhase,
    /// Punkte dieses Radius in Einfüge-Reihenfolge
    pub points: Vec<PlotPoint>,
    task: FadeTask,
}

/// Verwaltet alle aktiven Bereichs-Animationen (Einfüge-Reihenfolge).
pub struct AnimationManager {
    states: IndexMap<Radius, RegionAnimation>,
    capacity: usize,
}

impl AnimationManager {
    /// Erstellt eine leere Verwaltung mit der Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(MAX_ACTIVE_REGIONS)
    }

    /// Erstellt eine leere Verwaltung mit expliziter Kapazität.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: IndexMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Haltedauer bei voller Deckkraft (für die Sende-Taktung auslesbar).
    pub fn hold_duration(&self) -> Duration {
        HOLD_DURATION
    }

    /// Startet das Einblenden eines Radius.
    ///
    /// Existiert der Schlüssel bereits, bleibt seine Phase unberührt.
    /// Bei voller Kapazität wird vor dem Einfügen der älteste Eintrag
    /// (Einfüge-Reihenfolge, nicht Zugriff) verdrängt.
    pub fn show(&mut self, radius: Radius, now: Instant) {
        if self.states.contains_key(&radius) {
            return;
        }
        if self.states.len() >= self.capacity {
            if let Some((evicted, _)) = self.states.shift_remove_index(0) {
                log::debug!("Kapazität erreicht, verdränge Radius {}", evicted.label());
            }
        }
        self.states.insert(
            radius,
            RegionAnimation {
                opacity: 0.0,
                phase: FadePhase::FadingIn,
                points: Vec::new(),
                task: FadeTask {
                    next_tick: now,
                    hold_until: None,
                },
            },
        );
    }

    /// Startet das Ausblenden eines Radius; ohne Eintrag ein No-op.
    pub fn hide(&mut self, radius: Radius, now: Instant) {
        if let Some(anim) = self.states.get_mut(&radius) {
            if anim.phase != FadePhase::FadingOut {
                anim.phase = FadePhase::FadingOut;
                anim.task.hold_until = None;
                anim.task.next_tick = now + FADE_TICK_PERIOD;
            }
        }
    }

    /// Hängt einen Punkt an die Liste des Radius an.
    ///
    /// Stellt die Existenz des Zustands vorher synchron über das
    /// idempotente `show` sicher.
    pub fn add_point(&mut self, radius: Radius, point: PlotPoint, now: Instant) {
        self.show(radius, now);
        if let Some(anim) = self.states.get_mut(&radius) {
            anim.points.push(point);
        }
    }

    /// Entfernt alle Zustände sofort, ohne Ausblenden.
    ///
    /// Die Tick-Ketten hängen an den Einträgen und enden damit ebenfalls.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Treibt alle fälligen Fade-Ticks bis `now` voran.
    pub fn tick(&mut self, now: Instant) {
        let mut finished: Vec<Radius> = Vec::new();

        for (radius, anim) in self.states.iter_mut() {
            if Self::advance(anim, now) {
                finished.push(*radius);
            }
        }

        for radius in finished {
            self.states.shift_remove(&radius);
        }
    }

    /// Treibt einen Eintrag voran; `true` wenn er entfernt werden soll.
    fn advance(anim: &mut RegionAnimation, now: Instant) -> bool {
        loop {
            match anim.phase {
                FadePhase::FadingIn => {
                    if anim.task.next_tick > now {
                        return false;
                    }
                    let tick_time = anim.task.next_tick;
                    anim.task.next_tick += FADE_TICK_PERIOD;
                    anim.opacity += FADE_STEP;
                    // Schwelle: halbe Schrittweite, damit Float-Drift den
                    // letzten Schritt nicht verfehlt
                    if anim.opacity >= 1.0 - FADE_STEP / 2.0 {
                        anim.opacity = 1.0;
                        anim.phase = FadePhase::Visible;
                        anim.task.hold_until = Some(tick_time + HOLD_DURATION);
                    }
                }
                FadePhase::Visible => match anim.task.hold_until {
                    Some(hold_end) if hold_end <= now => {
                        anim.phase = FadePhase::FadingOut;
                        anim.task.hold_until = None;
                        anim.task.next_tick = hold_end;
                    }
                    _ => return false,
                },
                FadePhase::FadingOut => {
                    if anim.task.next_tick > now {
                        return false;
                    }
                    anim.task.next_tick += FADE_TICK_PERIOD;
                    anim.opacity -= FADE_STEP;
                    if anim.opacity <= FADE_STEP / 2.0 {
                        return true;
                    }
                }
            }
        }
    }

    /// Zustand eines Radius, falls vorhanden.
    pub fn get(&self, radius: Radius) -> Option<&RegionAnimation> {
        self.states.get(&radius)
    }

    /// Alle Zustände in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (Radius, &RegionAnimation)> {
        self.states.iter().map(|(r, a)| (*r, a))
    }

    /// Anzahl aktiver Zustände.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` wenn keine Animation aktiv ist.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_show_inserts_fading_in_with_zero_opacity() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();

        mgr.show(Radius::R2, base);

        let anim = mgr.get(Radius::R2).expect("Zustand muss existieren");
        assert_eq!(anim.phase, FadePhase::FadingIn);
        assert_relative_eq!(anim.opacity, 0.0);
        assert!(anim.points.is_empty());
    }

    #[test]
    fn test_show_is_noop_for_existing_key() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R1, base);
        mgr.tick(at(base, 200));

        let before = mgr.get(Radius::R1).unwrap().opacity;
        mgr.show(Radius::R1, at(base, 200));

        assert_relative_eq!(mgr.get(Radius::R1).unwrap().opacity, before);
    }

    #[test]
    fn test_tick_advances_opacity_in_steps() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R1, base);

        // Erster Tick ist sofort fällig, danach alle 50 ms
        mgr.tick(base);
        assert_relative_eq!(mgr.get(Radius::R1).unwrap().opacity, 0.05);

        mgr.tick(at(base, 100));
        assert_relative_eq!(mgr.get(Radius::R1).unwrap().opacity, 0.15, epsilon = 1e-6);
    }

    #[test]
    fn test_fade_in_clamps_at_full_opacity_and_holds() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R3, base);

        mgr.tick(at(base, 2000));

        let anim = mgr.get(Radius::R3).unwrap();
        assert_eq!(anim.phase, FadePhase::Visible);
        assert_relative_eq!(anim.opacity, 1.0);
    }

    #[test]
    fn test_hold_expires_into_fade_out_and_removal() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R1, base);

        // Einblenden (950 ms) + Halten (3000 ms) + Ausblenden (≤ 1050 ms)
        mgr.tick(at(base, 3960));
        assert_eq!(mgr.get(Radius::R1).unwrap().phase, FadePhase::FadingOut);

        mgr.tick(at(base, 6000));
        assert!(mgr.is_empty());
    }

    #[test]
    fn test_hide_before_fade_in_completes_converges_to_absent() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R2, base);
        mgr.tick(at(base, 200));

        mgr.hide(Radius::R2, at(base, 200));
        assert_eq!(mgr.get(Radius::R2).unwrap().phase, FadePhase::FadingOut);

        mgr.tick(at(base, 2000));
        assert!(mgr.get(Radius::R2).is_none());
    }

    #[test]
    fn test_hide_unknown_key_is_noop() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();

        mgr.hide(Radius::R3, base);

        assert!(mgr.is_empty());
    }

    #[test]
    fn test_capacity_evicts_first_inserted() {
        let base = Instant::now();
        let mut mgr = AnimationManager::with_capacity(2);
        mgr.show(Radius::R1, base);
        mgr.show(Radius::R2, base);

        mgr.show(Radius::R3, base);

        assert_eq!(mgr.len(), 2);
        assert!(mgr.get(Radius::R1).is_none(), "ältester Eintrag muss weichen");
        assert!(mgr.get(Radius::R2).is_some());
        assert!(mgr.get(Radius::R3).is_some());
    }

    #[test]
    fn test_capacity_never_exceeded_at_default() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        for radius in Radius::ALL {
            mgr.show(radius, base);
            assert!(mgr.len() <= MAX_ACTIVE_REGIONS);
        }
        assert_eq!(mgr.len(), 5);
    }

    #[test]
    fn test_add_point_ensures_state_synchronously() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();

        let point = PlotPoint {
            x: 1.0,
            y: -0.5,
            accepted: true,
        };
        mgr.add_point(Radius::R2_5, point, base);

        let anim = mgr.get(Radius::R2_5).expect("show muss implizit erfolgen");
        assert_eq!(anim.phase, FadePhase::FadingIn);
        assert_eq!(anim.points.len(), 1);
        assert_eq!(anim.points[0], point);
    }

    #[test]
    fn test_clear_drops_everything_despite_running_chains() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R1, base);
        mgr.show(Radius::R2, base);
        mgr.tick(at(base, 300));

        mgr.clear();

        assert!(mgr.is_empty());
        // Spätere Ticks dürfen nichts wiederbeleben
        mgr.tick(at(base, 1000));
        assert!(mgr.is_empty());
    }

    #[test]
    fn test_fade_in_duration_matches_step_count() {
        let base = Instant::now();
        let mut mgr = AnimationManager::new();
        mgr.show(Radius::R1, base);

        // 20 Schritte à 0.05: letzter Schritt bei 950 ms
        mgr.tick(at(base, 900));
        assert_eq!(mgr.get(Radius::R1).unwrap().phase, FadePhase::FadingIn);

        mgr.tick(at(base, 950));
        assert_eq!(mgr.get(Radius::R1).unwrap().phase, FadePhase::Visible);
    }
}
