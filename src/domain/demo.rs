//! Fixed demo catalogue inserted by the seed endpoint.

use chrono::{DateTime, Utc};

use super::{Event, Venue};

/// Returns the demo events, all dated `now`.
#[must_use]
pub fn demo_events(now: DateTime<Utc>) -> Vec<Event> {
    vec![
        Event {
            title: "Neon Nights Live DJ".to_string(),
            category: "concert".to_string(),
            description: Some("An immersive EDM experience with holographic visuals.".to_string()),
            date: now,
            duration_minutes: Some(180),
            price: 59.0,
            currency: "USD".to_string(),
            venue: Venue {
                name: "Pulse Arena".to_string(),
                address: "123 Bassline Ave".to_string(),
                city: "Los Angeles".to_string(),
                state: Some("CA".to_string()),
                country: "USA".to_string(),
                capacity: Some(12_000),
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1540039155733-5bb30b53aa14?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: vec!["edm".to_string(), "live".to_string(), "neon".to_string()],
            available: true,
        },
        Event {
            title: "Cinematic Premiere: Quantum Drift".to_string(),
            category: "cinema".to_string(),
            description: Some("Futuristic sci-fi premiere with cast Q&A.".to_string()),
            date: now,
            duration_minutes: Some(140),
            price: 18.0,
            currency: "USD".to_string(),
            venue: Venue {
                name: "HoloCine 8".to_string(),
                address: "88 Spectrum Blvd".to_string(),
                city: "San Francisco".to_string(),
                state: Some("CA".to_string()),
                country: "USA".to_string(),
                capacity: Some(800),
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: vec!["cinema".to_string(), "premiere".to_string()],
            available: true,
        },
        Event {
            title: "Gastronoir: Tasting Menu".to_string(),
            category: "dine-in".to_string(),
            description: Some("Multi-course tasting with ambient synthwave.".to_string()),
            date: now,
            duration_minutes: Some(120),
            price: 95.0,
            currency: "USD".to_string(),
            venue: Venue {
                name: "Obsidian Table".to_string(),
                address: "7 Eclipse Rd".to_string(),
                city: "New York".to_string(),
                state: Some("NY".to_string()),
                country: "USA".to_string(),
                capacity: Some(120),
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1467003909585-2f8a72700288?q=80&w=1600&auto=format&fit=crop"
                    .to_string(),
            ),
            tags: vec!["dining".to_string(), "tasting".to_string()],
            available: true,
        },
    ]
}
