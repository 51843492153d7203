use p13n_headers::HeaderData;

pub fn main() {
    env_logger::init();

    // Under CGI the web server exports request headers as `HTTP_*` variables. Fall back to a
    // canned request when run from a shell.
    let data = match HeaderData::from_env() {
        Ok(data) if !data.get_header("P13n-Geo-Country-Code").is_empty() => data,
        _ => HeaderData::new([
            ("HTTP_P13N_GEO_COUNTRY_CODE", "US"),
            ("HTTP_P13N_GEO_CITY", "Salt Lake City"),
            ("HTTP_P13N_INTEREST", "Carl Sagan|Richard Feynman"),
            ("HTTP_AUDIENCE_SET", "country:US|region:UT"),
            ("HTTP_VARY", "Accept-Encoding"),
        ]),
    };

    let p_obj = data.personalization_object();
    println!("Personalization: {}", serde_json::to_string_pretty(&p_obj).unwrap());

    let vary = data.add_vary("P13n-Geo-Country-Code");
    println!("Vary: {}", vary.vary.to_header_value());
}
