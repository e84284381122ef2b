//! Dashboard aggregates: per-day report volume and the gap-filled series
//! derived from it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Wire DTO ────────────────────────────────────────────────────────────────

/// Per-day report counts as returned by
/// `GET /admin/dashboard/reportes-general`. Days with no reports are
/// absent from the maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportVolume {
  #[serde(default)]
  pub objetos_perdidos_por_dia: BTreeMap<NaiveDate, u64>,
  #[serde(default)]
  pub incidentes_por_dia:       BTreeMap<NaiveDate, u64>,
}

// ─── Derived series ──────────────────────────────────────────────────────────

/// A contiguous per-day series with both report kinds aligned on one
/// date axis. Never stored — always derived from a [`ReportVolume`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySeries {
  pub dates:        Vec<NaiveDate>,
  pub lost_objects: Vec<u64>,
  pub incidents:    Vec<u64>,
}

impl DailySeries {
  /// Expand `volume` into a contiguous series from the earliest reported
  /// day up to, but excluding, `today`. Missing days count zero. Empty
  /// input yields an empty series.
  pub fn from_volume(volume: &ReportVolume, today: NaiveDate) -> Self {
    let start = volume
      .objetos_perdidos_por_dia
      .keys()
      .chain(volume.incidentes_por_dia.keys())
      .min()
      .copied();
    let Some(mut day) = start else {
      return Self::default();
    };

    let mut series = Self::default();
    while day < today {
      series.dates.push(day);
      series.lost_objects.push(
        volume
          .objetos_perdidos_por_dia
          .get(&day)
          .copied()
          .unwrap_or(0),
      );
      series
        .incidents
        .push(volume.incidentes_por_dia.get(&day).copied().unwrap_or(0));
      // succ_opt is None only at NaiveDate::MAX; stop there.
      let Some(next) = day.succ_opt() else { break };
      day = next;
    }
    series
  }

  pub fn len(&self) -> usize {
    self.dates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.dates.is_empty()
  }

  /// The trailing `n` days (or the whole series if shorter).
  pub fn tail(&self, n: usize) -> DailySeries {
    let skip = self.len().saturating_sub(n);
    DailySeries {
      dates:        self.dates[skip..].to_vec(),
      lost_objects: self.lost_objects[skip..].to_vec(),
      incidents:    self.incidents[skip..].to_vec(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, d).unwrap()
  }

  fn volume(lost: &[(u32, u64)], incidents: &[(u32, u64)]) -> ReportVolume {
    ReportVolume {
      objetos_perdidos_por_dia: lost
        .iter()
        .map(|(d, n)| (date(*d), *n))
        .collect(),
      incidentes_por_dia: incidents
        .iter()
        .map(|(d, n)| (date(*d), *n))
        .collect(),
    }
  }

  #[test]
  fn fills_gaps_with_zeros_and_aligns_both_kinds() {
    let v = volume(&[(10, 2), (13, 1)], &[(11, 4)]);
    let series = DailySeries::from_volume(&v, date(15));

    assert_eq!(
      series.dates,
      vec![date(10), date(11), date(12), date(13), date(14)]
    );
    assert_eq!(series.lost_objects, vec![2, 0, 0, 1, 0]);
    assert_eq!(series.incidents, vec![0, 4, 0, 0, 0]);
  }

  #[test]
  fn excludes_today() {
    let v = volume(&[(10, 1), (12, 3)], &[]);
    let series = DailySeries::from_volume(&v, date(12));
    assert_eq!(series.dates, vec![date(10), date(11)]);
    assert_eq!(series.lost_objects, vec![1, 0]);
  }

  #[test]
  fn empty_volume_yields_empty_series() {
    let series = DailySeries::from_volume(&ReportVolume::default(), date(15));
    assert!(series.is_empty());
  }

  #[test]
  fn range_starts_at_earliest_day_of_either_kind() {
    let v = volume(&[(12, 1)], &[(9, 2)]);
    let series = DailySeries::from_volume(&v, date(13));
    assert_eq!(series.dates.first(), Some(&date(9)));
  }

  #[test]
  fn tail_keeps_the_most_recent_days() {
    let v = volume(&[(1, 1), (2, 2), (3, 3), (4, 4)], &[]);
    let series = DailySeries::from_volume(&v, date(5)).tail(2);
    assert_eq!(series.dates, vec![date(3), date(4)]);
    assert_eq!(series.lost_objects, vec![3, 4]);

    let longer = DailySeries::from_volume(&v, date(5)).tail(99);
    assert_eq!(longer.len(), 4);
  }

  #[test]
  fn volume_deserialises_from_wire_shape() {
    let raw = serde_json::json!({
      "incidentesPorDia": { "2024-11-10": 3 },
      "objetosPerdidosPorDia": { "2024-11-09": 1, "2024-11-11": 2 },
    });
    let v: ReportVolume = serde_json::from_value(raw).unwrap();
    assert_eq!(v.incidentes_por_dia.get(&date(10)), Some(&3));
    assert_eq!(v.objetos_perdidos_por_dia.len(), 2);
  }
}
