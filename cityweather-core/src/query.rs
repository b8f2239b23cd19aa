use url::form_urlencoded;

use crate::{model::WeatherRequest, secrets::ApiKey};

/// OpenWeather current-weather endpoint.
pub const BASE_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Build the request URL: `<base>?q=<city>&units=<units>&appid=<key>`.
///
/// The city is form-encoded (spaces become `+`), the key is appended as-is.
pub fn build_query_url(base: &str, request: &WeatherRequest, api_key: &ApiKey) -> String {
    let city: String = form_urlencoded::byte_serialize(request.city.as_bytes()).collect();

    format!(
        "{base}?q={city}&units={units}&appid={key}",
        units = request.units.as_str(),
        key = api_key.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Units;

    fn params(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').expect("url must have a query");
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn key() -> ApiKey {
        ApiKey::new("0123abcd")
    }

    #[test]
    fn builds_metric_url_in_fixed_order() {
        let req = WeatherRequest::from_words(&["Paris"], Units::Metric);
        let url = build_query_url(BASE_WEATHER_API_URL, &req, &key());

        assert_eq!(
            url,
            "http://api.openweathermap.org/data/2.5/weather?q=Paris&units=metric&appid=0123abcd"
        );
    }

    #[test]
    fn multi_word_city_is_encoded_and_decodes_back() {
        let words = ["São", "Paulo", "&", "co/2"];
        let req = WeatherRequest::from_words(&words, Units::Metric);
        let url = build_query_url(BASE_WEATHER_API_URL, &req, &key());

        assert!(url.contains("q=S%C3%A3o+Paulo+%26+co%2F2&"));

        let params = params(&url);
        assert_eq!(params[0], ("q".to_string(), words.join(" ")));
    }

    #[test]
    fn imperial_flag_only_changes_units() {
        let metric = WeatherRequest::from_words(&["New", "York"], Units::Metric);
        let imperial = WeatherRequest::from_words(&["New", "York"], Units::Imperial);

        let m = params(&build_query_url(BASE_WEATHER_API_URL, &metric, &key()));
        let i = params(&build_query_url(BASE_WEATHER_API_URL, &imperial, &key()));

        assert_eq!(m[1], ("units".to_string(), "metric".to_string()));
        assert_eq!(i[1], ("units".to_string(), "imperial".to_string()));
        assert_eq!(m[0], i[0]);
        assert_eq!(m[2], i[2]);
        assert_eq!(m.len(), 3);
        assert_eq!(i.len(), 3);
    }

    #[test]
    fn api_key_is_appended_raw() {
        let req = WeatherRequest::from_words(&["Oslo"], Units::Metric);
        let url = build_query_url(BASE_WEATHER_API_URL, &req, &ApiKey::new("a+b"));
        assert!(url.ends_with("&appid=a+b"));
    }

    #[test]
    fn same_inputs_same_url() {
        let req = WeatherRequest::from_words(&["Rio", "de", "Janeiro"], Units::Imperial);
        assert_eq!(
            build_query_url(BASE_WEATHER_API_URL, &req, &key()),
            build_query_url(BASE_WEATHER_API_URL, &req, &key())
        );
    }
}
