use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerId;
use crate::yaku::{sum_points, Yaku};

/// Koikoi declarations a player (or a group of opponents) has made this round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoikoiStanding {
    pub level: u32,
    pub declared: bool,
}

impl KoikoiStanding {
    /// Sums the levels of several players; `declared` is set when any of
    /// them has ever declared.
    pub fn combined<'a>(standings: impl IntoIterator<Item = &'a KoikoiStanding>) -> Self {
        standings
            .into_iter()
            .fold(KoikoiStanding::default(), |acc, s| KoikoiStanding {
                level: acc.level + s.level,
                declared: acc.declared || s.declared,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub base: u32,
    pub multiplier: u32,
    pub total: u32,
}

fn doubling(level: u32) -> u32 {
    2u32.saturating_pow(level)
}

/// Base yaku points times the koikoi multiplier.
///
/// The multiplier is `2^own_level`, doubled again `opponent.level` times when
/// any opponent has declared koikoi. It only applies to a positive base.
///
/// # Examples
///
/// ```
/// use koikoi_engine::score::{compute_player_score, KoikoiStanding};
///
/// let own = KoikoiStanding { level: 0, declared: false };
/// let opponents = KoikoiStanding { level: 1, declared: true };
/// let yaku = koikoi_engine::yaku::evaluate(&[]);
/// let score = compute_player_score(&yaku, own, opponents);
/// assert_eq!(score.total, 0);
/// assert_eq!(score.multiplier, 1);
/// ```
pub fn compute_player_score(
    yaku: &[Yaku],
    own: KoikoiStanding,
    opponents: KoikoiStanding,
) -> PlayerScore {
    let base = sum_points(yaku);
    let multiplier = if base == 0 {
        1
    } else {
        let opponent_factor = if opponents.declared {
            doubling(opponents.level)
        } else {
            1
        };
        doubling(own.level).saturating_mul(opponent_factor)
    };
    PlayerScore {
        base,
        multiplier,
        total: base.saturating_mul(multiplier),
    }
}

/// One player's input to round scoring.
#[derive(Debug, Clone)]
pub struct ScoreEntry<'a> {
    pub player_id: &'a PlayerId,
    pub yaku: &'a [Yaku],
    pub standing: KoikoiStanding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub player_id: PlayerId,
    pub points: u32,
    pub score: PlayerScore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPoints {
    pub winner_id: Option<PlayerId>,
    pub points: Vec<PlayerPoints>,
}

/// Assigns round points.
///
/// With an explicit `winner` that player receives their total and everyone
/// else 0. Otherwise the strict unique positive maximum wins; a tie at the
/// top or no positive total gives everyone 0 and no winner.
///
/// # Errors
///
/// [`GameError::UnknownPlayer`] when `winner` is not among `entries`.
pub fn build_round_points(
    entries: &[ScoreEntry<'_>],
    winner: Option<&PlayerId>,
) -> Result<RoundPoints, GameError> {
    let scores: Vec<(&PlayerId, PlayerScore)> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let opponents = KoikoiStanding::combined(
                entries
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, e)| &e.standing),
            );
            (
                entry.player_id,
                compute_player_score(entry.yaku, entry.standing, opponents),
            )
        })
        .collect();

    let winner_id = match winner {
        Some(id) => {
            if !scores.iter().any(|(pid, _)| *pid == id) {
                return Err(GameError::UnknownPlayer(id.clone()));
            }
            Some(id.clone())
        }
        None => unique_top_scorer(&scores),
    };

    let points = scores
        .into_iter()
        .map(|(pid, score)| PlayerPoints {
            player_id: pid.clone(),
            points: if winner_id.as_ref() == Some(pid) {
                score.total
            } else {
                0
            },
            score,
        })
        .collect();

    Ok(RoundPoints { winner_id, points })
}

fn unique_top_scorer(scores: &[(&PlayerId, PlayerScore)]) -> Option<PlayerId> {
    let top = scores.iter().map(|(_, s)| s.total).max()?;
    if top == 0 {
        return None;
    }
    let mut leaders = scores.iter().filter(|(_, s)| s.total == top);
    let (first, _) = leaders.next()?;
    if leaders.next().is_some() {
        None
    } else {
        Some((*first).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaku::YakuKey;

    fn yaku(points: &[u32]) -> Vec<Yaku> {
        points
            .iter()
            .map(|&p| Yaku {
                key: YakuKey::AnimalSet,
                points: p,
            })
            .collect()
    }

    #[test]
    fn own_koikoi_doubles() {
        let s = compute_player_score(
            &yaku(&[5, 1]),
            KoikoiStanding {
                level: 1,
                declared: true,
            },
            KoikoiStanding::default(),
        );
        assert_eq!(
            s,
            PlayerScore {
                base: 6,
                multiplier: 2,
                total: 12
            }
        );
    }

    #[test]
    fn opponent_koikoi_doubles() {
        let s = compute_player_score(
            &yaku(&[5]),
            KoikoiStanding::default(),
            KoikoiStanding {
                level: 1,
                declared: true,
            },
        );
        assert_eq!(s.multiplier, 2);
        assert_eq!(s.total, 10);
    }

    #[test]
    fn undeclared_opponent_levels_are_ignored() {
        let s = compute_player_score(
            &yaku(&[5]),
            KoikoiStanding::default(),
            KoikoiStanding {
                level: 3,
                declared: false,
            },
        );
        assert_eq!(s.multiplier, 1);
    }

    #[test]
    fn zero_base_keeps_unit_multiplier() {
        let s = compute_player_score(
            &[],
            KoikoiStanding {
                level: 2,
                declared: true,
            },
            KoikoiStanding::default(),
        );
        assert_eq!((s.base, s.multiplier, s.total), (0, 1, 0));
    }

    #[test]
    fn combined_sums_levels_and_ors_flags() {
        let c = KoikoiStanding::combined(&[
            KoikoiStanding {
                level: 1,
                declared: true,
            },
            KoikoiStanding {
                level: 2,
                declared: false,
            },
        ]);
        assert_eq!(
            c,
            KoikoiStanding {
                level: 3,
                declared: true
            }
        );
    }

    #[test]
    fn unique_top_scorer_wins() {
        let a = PlayerId::from("a");
        let b = PlayerId::from("b");
        let ya = yaku(&[5]);
        let yb = yaku(&[1]);
        let entries = [
            ScoreEntry {
                player_id: &a,
                yaku: &ya,
                standing: KoikoiStanding::default(),
            },
            ScoreEntry {
                player_id: &b,
                yaku: &yb,
                standing: KoikoiStanding::default(),
            },
        ];
        let rp = build_round_points(&entries, None).unwrap();
        assert_eq!(rp.winner_id, Some(a.clone()));
        assert_eq!(rp.points[0].points, 5);
        assert_eq!(rp.points[1].points, 0);
    }

    #[test]
    fn tie_gives_nobody_points() {
        let a = PlayerId::from("a");
        let b = PlayerId::from("b");
        let y = yaku(&[5]);
        let entries = [
            ScoreEntry {
                player_id: &a,
                yaku: &y,
                standing: KoikoiStanding::default(),
            },
            ScoreEntry {
                player_id: &b,
                yaku: &y,
                standing: KoikoiStanding::default(),
            },
        ];
        let rp = build_round_points(&entries, None).unwrap();
        assert!(rp.winner_id.is_none());
        assert!(rp.points.iter().all(|p| p.points == 0));
    }

    #[test]
    fn explicit_winner_takes_total_even_if_lower() {
        let a = PlayerId::from("a");
        let b = PlayerId::from("b");
        let ya = yaku(&[1]);
        let yb = yaku(&[9]);
        let entries = [
            ScoreEntry {
                player_id: &a,
                yaku: &ya,
                standing: KoikoiStanding::default(),
            },
            ScoreEntry {
                player_id: &b,
                yaku: &yb,
                standing: KoikoiStanding::default(),
            },
        ];
        let rp = build_round_points(&entries, Some(&a)).unwrap();
        assert_eq!(rp.winner_id, Some(a.clone()));
        assert_eq!(rp.points[0].points, 1);
        assert_eq!(rp.points[1].points, 0);

        let ghost = PlayerId::from("ghost");
        assert!(matches!(
            build_round_points(&entries, Some(&ghost)),
            Err(GameError::UnknownPlayer(_))
        ));
    }
}
