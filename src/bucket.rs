//! Groups milestones into named time buckets derived from their due dates.

use chrono::{DateTime, Utc};

use crate::milestone::Milestone;

/// A named time grouping and the milestones sharing it. Buckets are kept in
/// first-encounter order, not chronological order.
#[derive(Debug)]
pub struct TimeBucket {
    pub label: String,
    pub milestones: Vec<Milestone>,
}

const NO_DUE_DATE: &str = "No due date";
const THIS_WEEK: &str = "This Week";

/// The bucket label for a due date relative to `now`.
///
/// Hour-and-below distances and up to seven days out collapse into
/// `"This Week"`; longer day-scale distances become `"in N Weeks"`. Every
/// other phrasing of the relative distance (months, years, anything in the
/// past) passes through verbatim as the bucket key.
pub(crate) fn bucket_for(now: DateTime<Utc>, due_on: Option<DateTime<Utc>>) -> String {
    let due = match due_on {
        Some(due) => due,
        None => return NO_DUE_DATE.to_string(),
    };
    let distance = Distance::between(now, due);
    if distance.future {
        match distance.unit {
            Unit::Seconds | Unit::Minutes | Unit::Hours => return THIS_WEEK.to_string(),
            Unit::Days if distance.count > 7 => {
                let weeks = (distance.count as f64 / 7.0).round() as i64;
                return format!("in {} Weeks", weeks);
            }
            Unit::Days => return THIS_WEEK.to_string(),
            Unit::Months | Unit::Years => {}
        }
    }
    distance.phrase()
}

/// Groups milestones by bucket label, preserving both the first-encounter
/// order of labels and the tracker order of milestones within a bucket.
pub(crate) fn group_by_due(now: DateTime<Utc>, milestones: Vec<Milestone>) -> Vec<TimeBucket> {
    let mut buckets: Vec<TimeBucket> = Vec::new();
    for milestone in milestones {
        let label = bucket_for(now, milestone.due_on);
        match buckets.iter_mut().find(|bucket| bucket.label == label) {
            Some(bucket) => bucket.milestones.push(milestone),
            None => buckets.push(TimeBucket {
                label,
                milestones: vec![milestone],
            }),
        }
    }
    buckets
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

/// A relative distance in the largest sensible unit, phrased the way
/// conversational "from now" formatters phrase it. A count of one selects the
/// article form ("a minute", "an hour").
#[derive(Clone, Copy, Debug)]
struct Distance {
    unit: Unit,
    count: i64,
    future: bool,
}

impl Distance {
    fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Distance {
        let seconds = (to - from).num_seconds().abs();
        let minutes = (seconds as f64 / 60.0).round() as i64;
        let hours = (seconds as f64 / 3600.0).round() as i64;
        let days = (seconds as f64 / 86_400.0).round() as i64;
        let (unit, count) = if seconds < 45 {
            (Unit::Seconds, 0)
        } else if seconds < 90 {
            (Unit::Minutes, 1)
        } else if minutes < 45 {
            (Unit::Minutes, minutes)
        } else if seconds < 90 * 60 {
            (Unit::Hours, 1)
        } else if hours < 22 {
            (Unit::Hours, hours)
        } else if seconds < 36 * 3600 {
            (Unit::Days, 1)
        } else if days < 26 {
            (Unit::Days, days)
        } else if days < 46 {
            (Unit::Months, 1)
        } else if days < 320 {
            (Unit::Months, (days as f64 / 30.0).round() as i64)
        } else if days < 548 {
            (Unit::Years, 1)
        } else {
            (Unit::Years, (days as f64 / 365.0).round() as i64)
        };
        Distance {
            unit,
            count,
            future: to >= from,
        }
    }

    fn phrase(&self) -> String {
        let body = match (self.unit, self.count) {
            (Unit::Seconds, _) => "a few seconds".to_string(),
            (Unit::Minutes, 1) => "a minute".to_string(),
            (Unit::Minutes, n) => format!("{} minutes", n),
            (Unit::Hours, 1) => "an hour".to_string(),
            (Unit::Hours, n) => format!("{} hours", n),
            (Unit::Days, 1) => "a day".to_string(),
            (Unit::Days, n) => format!("{} days", n),
            (Unit::Months, 1) => "a month".to_string(),
            (Unit::Months, n) => format!("{} months", n),
            (Unit::Years, 1) => "a year".to_string(),
            (Unit::Years, n) => format!("{} years", n),
        };
        if self.future {
            format!("in {}", body)
        } else {
            format!("{} ago", body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{bucket_for, group_by_due};
    use crate::milestone::{Milestone, MilestoneId};
    use chrono::{DateTime, Duration, Utc};

    fn now() -> DateTime<Utc> {
        "2013-04-01T12:00:00Z".parse().unwrap()
    }

    fn milestone(number: u64, due: Option<DateTime<Utc>>) -> Milestone {
        Milestone {
            id: MilestoneId::Number(number),
            title: format!("v{}.0", number),
            due_on: due,
            open_issues: None,
            closed_issues: None,
            issues: None,
            labels: Vec::new(),
        }
    }

    #[test]
    fn missing_due_date() {
        assert_eq!(bucket_for(now(), None), "No due date");
    }

    #[test]
    fn sub_day_distances_land_in_this_week() {
        for due in [
            now() + Duration::seconds(10),
            now() + Duration::minutes(30),
            now() + Duration::hours(5),
        ] {
            assert_eq!(bucket_for(now(), Some(due)), "This Week");
        }
    }

    #[test]
    fn up_to_seven_days_lands_in_this_week() {
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(3))),
            "This Week"
        );
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(7))),
            "This Week"
        );
    }

    #[test]
    fn longer_day_distances_round_to_weeks() {
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(10))),
            "in 1 Weeks"
        );
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(21))),
            "in 3 Weeks"
        );
    }

    #[test]
    fn month_scale_distances_pass_through_verbatim() {
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(40))),
            "in a month"
        );
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(90))),
            "in 3 months"
        );
        assert_eq!(
            bucket_for(now(), Some(now() + Duration::days(800))),
            "in 2 years"
        );
    }

    #[test]
    fn past_distances_pass_through_verbatim() {
        assert_eq!(
            bucket_for(now(), Some(now() - Duration::hours(30))),
            "a day ago"
        );
        assert_eq!(
            bucket_for(now(), Some(now() - Duration::days(40))),
            "a month ago"
        );
    }

    #[test]
    fn buckets_keep_first_encounter_order() {
        let milestones = vec![
            milestone(1, Some(now() + Duration::days(10))),
            milestone(2, None),
            milestone(3, Some(now() + Duration::days(9))),
            milestone(4, Some(now() + Duration::days(2))),
        ];
        let buckets = group_by_due(now(), milestones);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["in 1 Weeks", "No due date", "This Week"]);
        assert_eq!(buckets[0].milestones.len(), 2);
        assert_eq!(buckets[0].milestones[0].id, MilestoneId::Number(1));
        assert_eq!(buckets[0].milestones[1].id, MilestoneId::Number(3));
    }
}
