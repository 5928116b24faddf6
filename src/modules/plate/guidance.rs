use super::catalogue::formats_for;
use super::country::Country;
use strum::IntoEnumIterator;

/// one line per format of the country, eg: `- current: AA-00-AA (e.g. AB-12-CD)`
fn format_lines(country: Country, with_examples: bool) -> String {
    formats_for(country)
        .map(|f| {
            if with_examples {
                format!("- {}: {} (e.g. {})", f.name, f.shape, f.examples.join(" or "))
            } else {
                format!("- {}: {}", f.name, f.shape)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn all_country_sections(with_examples: bool) -> String {
    Country::iter()
        .map(|c| format!("\n=== {} ===\n{}", c, format_lines(c, with_examples)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists the formats of every country in the catalogue
pub fn all_formats_guidance() -> String {
    format!("Valid plate formats:\n{}", all_country_sections(true))
}

/// Describes the plate formats accepted for a city.
///
/// if the city's country is recognized only that country's formats are listed,
/// otherwise the formats of every country are.
pub fn format_guidance(city_description: Option<&str>) -> String {
    let Some(city) = city_description else {
        return format!(
            "Invalid plate format. The city's country was not specified.\nGeneral valid formats:\n{}",
            all_country_sections(true)
        );
    };

    match Country::from_city(city) {
        Some(country) => format!(
            "Valid {} plate formats:\n{}",
            country.adjective(),
            format_lines(country, true)
        ),
        None => format!(
            "Invalid plate format for the selected city's country. Please check the plate and the city.\nGeneral valid formats (check the city's country):\n{}",
            all_country_sections(false)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentions(guidance: &str, country: Country) -> bool {
        guidance.contains(&format!("=== {} ===", country)) || guidance.contains(country.adjective())
    }

    #[test]
    fn recognized_city_only_lists_its_country() {
        for (city, country) in [
            ("Lisboa", Country::Portugal),
            ("Barcelona", Country::Spain),
            ("Marselha", Country::France),
        ] {
            let guidance = format_guidance(Some(city));

            for other in Country::iter() {
                assert_eq!(mentions(&guidance, other), other == country, "{city} {other}");
            }
        }
    }

    #[test]
    fn portuguese_guidance_lists_its_three_formats() {
        let guidance = format_guidance(Some("Porto"));

        assert_eq!(
            guidance,
            "Valid Portuguese plate formats:\n\
             - current: AA-00-AA (e.g. AB-12-CD)\n\
             - old: 00-AA-00 (e.g. 12-AB-34)\n\
             - very old: AA-0000 (e.g. AB-1234)"
        );
    }

    #[test]
    fn unrecognized_city_lists_every_country() {
        let guidance = format_guidance(Some("Berlin"));

        assert!(guidance.starts_with("Invalid plate format for the selected city's country"));
        for country in Country::iter() {
            assert!(guidance.contains(&format!("=== {} ===", country)));
        }
    }

    #[test]
    fn missing_city_lists_every_country_with_examples() {
        let guidance = format_guidance(None);

        assert!(guidance.contains("was not specified"));
        assert!(guidance.contains("(e.g. 1234 ABC or 1234-FGH)"));
        for country in Country::iter() {
            assert!(guidance.contains(&format!("=== {} ===", country)));
        }
    }
}
