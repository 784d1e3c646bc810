// query.rs
use crate::domain::{Dataset, FilterSpec, PipelineError, Selection, SortKey};
use crate::errors::ServerError;
use url::form_urlencoded;

/// Dashboard and export parameters, as sent by the filter form.
///
/// `filtered=1` marks a submitted form: the bedroom and property-type
/// lists are then taken literally, so unticking everything shows nothing.
/// Without it, missing lists fall back to every observed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardQuery {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub bedrooms: Vec<f64>,
    pub property_types: Vec<String>,
    pub explicit: bool,
    pub sort: SortKey,
    pub show: Option<usize>,
}

impl DashboardQuery {
    pub fn parse(query: Option<&str>) -> Result<Self, ServerError> {
        let mut out = DashboardQuery::default();

        let Some(query) = query else {
            return Ok(out);
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match &*key {
                "price_min" => out.price_min = parse_optional(&key, value)?,
                "price_max" => out.price_max = parse_optional(&key, value)?,
                "bedrooms" => {
                    if let Some(n) = parse_optional(&key, value)? {
                        out.bedrooms.push(n);
                    }
                }
                "property_type" => {
                    if !value.is_empty() {
                        out.property_types.push(value.to_string());
                    }
                }
                "filtered" => out.explicit = value == "1",
                "sort" => out.sort = value.parse()?,
                "show" => out.show = parse_optional(&key, value)?,
                other => {
                    return Err(PipelineError::InvalidFilterSpec(format!(
                        "unknown parameter '{other}'"
                    ))
                    .into())
                }
            }
        }

        Ok(out)
    }

    /// Layers the query on top of the dataset's observed defaults.
    ///
    /// A defaulted price bound is pulled in to meet a one-sided bound, so
    /// only a range the caller inverted fails validation.
    pub fn filter_spec(&self, dataset: &Dataset) -> FilterSpec {
        let mut spec = FilterSpec::observed(dataset);

        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) => {
                spec.price_min = min;
                spec.price_max = max;
            }
            (Some(min), None) => {
                spec.price_min = min;
                spec.price_max = spec.price_max.max(min);
            }
            (None, Some(max)) => {
                spec.price_min = spec.price_min.min(max);
                spec.price_max = max;
            }
            (None, None) => {}
        }

        spec.bedrooms = narrow(spec.bedrooms, &self.bedrooms, self.explicit);
        spec.property_types = narrow(spec.property_types, &self.property_types, self.explicit);

        spec
    }

    /// Query string that reproduces the filter, for export links.
    pub fn filter_query_string(&self, spec: &FilterSpec) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("filtered", "1");
        out.append_pair("price_min", &spec.price_min.to_string());
        out.append_pair("price_max", &spec.price_max.to_string());

        match &spec.bedrooms {
            Selection::Only(values) => {
                for b in values {
                    out.append_pair("bedrooms", &b.to_string());
                }
            }
            Selection::All => {}
        }
        match &spec.property_types {
            Selection::Only(values) => {
                for t in values {
                    out.append_pair("property_type", t);
                }
            }
            Selection::All => {}
        }

        out.finish()
    }
}

/// An unconstrained category stays open unless values were actually chosen.
fn narrow<T: Clone>(observed: Selection<T>, chosen: &[T], explicit: bool) -> Selection<T> {
    match observed {
        Selection::All if chosen.is_empty() => Selection::All,
        _ if explicit || !chosen.is_empty() => Selection::Only(chosen.to_vec()),
        observed => observed,
    }
}

fn parse_optional<T: std::str::FromStr>(key: &str, value: &str) -> Result<Option<T>, ServerError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ServerError::BadRequest(format!("'{value}' is not a valid {key}")))
}
