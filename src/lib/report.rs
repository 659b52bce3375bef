use crate::lib::model::{Action, Recommendation};

/// Criteria for narrowing a set of recommendations
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    /// Keep only instances in this state (e.g. `running`)
    pub state: Option<String>,
    pub only_downsize: bool,
    pub only_upsize: bool,
    /// Minimum average CPU (%)
    pub min_cpu: f64,
}

impl RecommendationFilter {
    pub fn matches(&self, rec: &Recommendation) -> bool {
        if let Some(state) = self.state.as_deref() {
            if rec.state.as_str() != state {
                return false;
            }
        }
        if self.only_downsize && rec.action != Action::Downsize {
            return false;
        }
        if self.only_upsize && rec.action != Action::Upsize {
            return false;
        }
        rec.avg_cpu >= self.min_cpu
    }

    /// Drop recommendations that do not match, preserving order
    pub fn apply(&self, recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
        recommendations
            .into_iter()
            .filter(|rec| self.matches(rec))
            .collect()
    }
}

/// Sort order for recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Keep analysis order
    #[default]
    None,
    /// Highest average CPU first
    Cpu,
    /// Highest monthly cost first
    Cost,
    /// Highest estimated saving first
    Savings,
}

/// Sort descending by the chosen key; ties keep their relative order
pub fn sort_recommendations(recommendations: &mut [Recommendation], key: SortKey) {
    let field: fn(&Recommendation) -> f64 = match key {
        SortKey::None => return,
        SortKey::Cpu => |r: &Recommendation| r.avg_cpu,
        SortKey::Cost => |r: &Recommendation| r.monthly_cost,
        SortKey::Savings => |r: &Recommendation| r.estimated_saving,
    };
    recommendations.sort_by(|a, b| field(b).total_cmp(&field(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::model::InstanceState;

    fn rec(
        id: &str,
        state: &str,
        action: Action,
        avg_cpu: f64,
        cost: f64,
        saving: f64,
    ) -> Recommendation {
        Recommendation {
            instance_id: id.to_string(),
            instance_type: "t3.medium".to_string(),
            state: InstanceState::from(state),
            avg_cpu,
            peak_cpu: avg_cpu,
            monthly_cost: cost,
            hourly_cost: cost / 720.0,
            action,
            suggested_type: String::new(),
            estimated_saving: saving,
            reason: String::new(),
        }
    }

    fn sample() -> Vec<Recommendation> {
        vec![
            rec("a", "running", Action::Downsize, 10.0, 30.0, 9.0),
            rec("b", "stopped", Action::Review, 0.0, 0.0, 0.0),
            rec("c", "running", Action::Upsize, 90.0, 140.0, 0.0),
            rec("d", "running", Action::Keep, 45.0, 60.0, 0.0),
        ]
    }

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.instance_id.as_str()).collect()
    }

    #[test]
    fn default_filter_keeps_everything() {
        let out = RecommendationFilter::default().apply(sample());
        assert_eq!(ids(&out), ["a", "b", "c", "d"]);
    }

    #[test]
    fn filters_by_state_action_and_cpu() {
        let by_state = RecommendationFilter {
            state: Some("stopped".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&by_state.apply(sample())), ["b"]);

        let downsize = RecommendationFilter {
            only_downsize: true,
            ..Default::default()
        };
        assert_eq!(ids(&downsize.apply(sample())), ["a"]);

        let upsize = RecommendationFilter {
            only_upsize: true,
            ..Default::default()
        };
        assert_eq!(ids(&upsize.apply(sample())), ["c"]);

        let busy = RecommendationFilter {
            min_cpu: 40.0,
            ..Default::default()
        };
        assert_eq!(ids(&busy.apply(sample())), ["c", "d"]);
    }

    #[test]
    fn sorts_descending() {
        let mut recs = sample();
        sort_recommendations(&mut recs, SortKey::Cpu);
        assert_eq!(ids(&recs), ["c", "d", "a", "b"]);

        sort_recommendations(&mut recs, SortKey::Cost);
        assert_eq!(ids(&recs), ["c", "d", "a", "b"]);

        sort_recommendations(&mut recs, SortKey::Savings);
        assert_eq!(ids(&recs), ["a", "c", "d", "b"]);
    }

    #[test]
    fn sort_none_keeps_order() {
        let mut recs = sample();
        sort_recommendations(&mut recs, SortKey::None);
        assert_eq!(ids(&recs), ["a", "b", "c", "d"]);
    }
}
