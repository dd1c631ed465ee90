//! Print site information

use anyhow::Result;

use crate::Folio;

/// Print the site identity, social links, and contact details
pub fn run(folio: &Folio) -> Result<()> {
    let config = &folio.config;

    println!("{} - {}", config.title, config.url);
    if !config.description.is_empty() {
        println!("{}", config.description);
    }
    println!("Author: {}", config.author);

    let links = [
        ("GitHub", &config.links.github),
        ("Twitter", &config.links.twitter),
        ("LinkedIn", &config.links.linkedin),
        ("Facebook", &config.links.facebook),
    ];
    for (name, link) in links {
        if let Some(url) = link {
            println!("{}: {}", name, url);
        }
    }

    if let Some(email) = &config.contact.email {
        println!("Email: {}", email);
    }
    if let Some(location) = &config.contact.location {
        println!("Location: {}", location);
    }

    Ok(())
}
