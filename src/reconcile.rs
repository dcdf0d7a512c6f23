//! Reconciliation of the axes named by a request with the axes of the data.
//!
//! The relationship between the two axis sets decides how a request is
//! executed: interpolate everything, interpolate a part and broadcast the
//! rest, or plain broadcast without any interpolation. Axis names compare
//! as exact strings; the data axes are expected to be squeezed already,
//! singleton axes only broadcast and never take part in the comparison.

use crate::InterpolateError;

/// How the requested axis set relates to the (squeezed) data axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisRelation {
    /// the data has no free axes left, the request only broadcasts
    FullyCollapsed,
    /// request and data name the same axes
    ExactMatch,
    /// the request names every data axis plus new ones
    Superset,
    /// the request leaves data axes unmentioned
    Subset,
}

#[derive(Debug)]
pub(crate) struct ReconciliationPlan {
    pub relation: AxisRelation,
    /// request axes present in the data, in request order
    pub interp_axes: Vec<String>,
    /// request axes absent from the data, in request order
    pub extend_axes: Vec<String>,
}

/// Classify the axis sets without deciding whether the result is executable.
pub(crate) fn classify(
    data_axes: &[String],
    request_axes: &[String],
) -> Result<AxisRelation, InterpolateError> {
    if request_axes.is_empty() {
        return Err(InterpolateError::Configuration(
            "the request names no axes".into(),
        ));
    }

    let missing: Vec<&String> = data_axes
        .iter()
        .filter(|name| !request_axes.contains(name))
        .collect();
    let new: Vec<&String> = request_axes
        .iter()
        .filter(|name| !data_axes.contains(name))
        .collect();

    if data_axes.is_empty() {
        Ok(AxisRelation::FullyCollapsed)
    } else if missing.is_empty() && new.is_empty() {
        Ok(AxisRelation::ExactMatch)
    } else if missing.is_empty() {
        Ok(AxisRelation::Superset)
    } else if new.is_empty() {
        Ok(AxisRelation::Subset)
    } else {
        // neither a subset nor a superset, there is no sensible
        // way to combine interpolation and broadcasting here
        Err(InterpolateError::UnsupportedShape(format!(
            "data axes {missing:?} are missing from the request while {new:?} are not in the data"
        )))
    }
}

/// Turn the classification into an executable plan or refuse the request.
pub(crate) fn plan(
    data_axes: &[String],
    request_axes: &[String],
    extend_dims: bool,
) -> Result<ReconciliationPlan, InterpolateError> {
    let relation = classify(data_axes, request_axes)?;

    let interp_axes: Vec<String> = request_axes
        .iter()
        .filter(|name| data_axes.contains(name))
        .cloned()
        .collect();
    let extend_axes: Vec<String> = request_axes
        .iter()
        .filter(|name| !data_axes.contains(name))
        .cloned()
        .collect();

    match relation {
        AxisRelation::Subset => {
            let missing: Vec<&String> = data_axes
                .iter()
                .filter(|name| !request_axes.contains(name))
                .collect();
            Err(InterpolateError::UnsupportedShape(format!(
                "data axes {missing:?} are missing from the request, reducing them is not supported"
            )))
        }
        AxisRelation::Superset if !extend_dims => {
            Err(InterpolateError::UnsupportedShape(format!(
                "request axes {extend_axes:?} do not exist in the data and extend_dims is disabled"
            )))
        }
        _ => Ok(ReconciliationPlan {
            relation,
            interp_axes,
            extend_axes,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::AxisRelation::*;
    use super::*;
    use crate::InterpolateError;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn classify_exact_match() {
        let relation = classify(&names(&["x", "y"]), &names(&["y", "x"])).unwrap();
        assert_eq!(relation, ExactMatch);
    }

    #[test]
    fn classify_superset() {
        let relation = classify(&names(&["x"]), &names(&["x", "y"])).unwrap();
        assert_eq!(relation, Superset);
    }

    #[test]
    fn classify_subset() {
        let relation = classify(&names(&["x", "y"]), &names(&["x"])).unwrap();
        assert_eq!(relation, Subset);
    }

    #[test]
    fn classify_fully_collapsed() {
        let relation = classify(&[], &names(&["x", "y"])).unwrap();
        assert_eq!(relation, FullyCollapsed);
    }

    #[test]
    fn classify_empty_request() {
        assert!(matches!(
            classify(&names(&["x"]), &[]),
            Err(InterpolateError::Configuration(_))
        ));
    }

    #[test]
    fn classify_partial_overlap() {
        assert!(matches!(
            classify(&names(&["x", "y"]), &names(&["y", "z"])),
            Err(InterpolateError::UnsupportedShape(_))
        ));
    }

    #[test]
    fn plan_splits_in_request_order() {
        let plan = plan(&names(&["b", "a"]), &names(&["u", "a", "v", "b"]), true).unwrap();
        assert_eq!(plan.relation, Superset);
        assert_eq!(plan.interp_axes, names(&["a", "b"]));
        assert_eq!(plan.extend_axes, names(&["u", "v"]));
    }

    #[test]
    fn plan_refuses_subset() {
        assert!(matches!(
            plan(&names(&["x", "y"]), &names(&["x"]), true),
            Err(InterpolateError::UnsupportedShape(_))
        ));
    }

    #[test]
    fn plan_refuses_superset_without_extend() {
        assert!(matches!(
            plan(&names(&["x"]), &names(&["x", "y"]), false),
            Err(InterpolateError::UnsupportedShape(_))
        ));
    }
}
