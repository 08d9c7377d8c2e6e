//! Brands and the default content each one ships with.

use serde::{Deserialize, Serialize};

use crate::models::{Client, Project};

/// The site identity. Selects names, the default storage namespace and seed data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Zenith,
    Pixel,
}

impl Brand {
    pub fn site_name(self) -> &'static str {
        match self {
            Brand::Zenith => "ZenithHomes",
            Brand::Pixel => "PixelRealty",
        }
    }

    pub fn admin_title(self) -> &'static str {
        match self {
            Brand::Zenith => "ZenithAdmin",
            Brand::Pixel => "PixelAdmin",
        }
    }

    /// First letter used in the logo badge.
    pub fn initial(self) -> char {
        self.site_name().chars().next().unwrap_or('Z')
    }

    pub fn default_namespace(self) -> &'static str {
        match self {
            Brand::Zenith => "zenith",
            Brand::Pixel => "pixel",
        }
    }

    pub fn seed(self) -> Seed {
        match self {
            Brand::Zenith => zenith_seed(),
            Brand::Pixel => pixel_seed(),
        }
    }
}

/// Initial projects and testimonials. Contacts and subscribers always start empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Seed {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
}

fn project(id: &str, name: &str, description: &str, image_url: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

fn client(id: &str, name: &str, designation: &str, description: &str, image_url: &str) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

const UNSPLASH: &str = "https://images.unsplash.com";

fn zenith_seed() -> Seed {
    Seed {
        projects: vec![
            project(
                "1",
                "Skyline Heights",
                "Luxury apartments with panoramic city views.",
                &format!("{UNSPLASH}/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=1000&q=80"),
            ),
            project(
                "2",
                "Eco Villa Series",
                "Sustainable living with modern architectural design.",
                &format!("{UNSPLASH}/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=1000&q=80"),
            ),
            project(
                "3",
                "Urban Lofts",
                "Industrial style lofts in the heart of the creative district.",
                &format!("{UNSPLASH}/photo-1574362848149-11496d93a7c7?auto=format&fit=crop&w=1000&q=80"),
            ),
            project(
                "4",
                "Seaside Retreat",
                "Exclusive beachfront properties for the ultimate getaway.",
                &format!("{UNSPLASH}/photo-1613490493576-7fde63acd811?auto=format&fit=crop&w=1000&q=80"),
            ),
        ],
        clients: vec![
            client(
                "1",
                "Sarah Jenkins",
                "Tech Entrepreneur",
                "ZenithHomes found me the perfect penthouse workspace. The process was seamless and professional.",
                &format!("{UNSPLASH}/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=200&q=80"),
            ),
            client(
                "2",
                "Marcus Chen",
                "Architect",
                "As an architect, I appreciate their eye for detail. They truly understand quality construction.",
                &format!("{UNSPLASH}/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=200&q=80"),
            ),
            client(
                "3",
                "Elena Rodriguez",
                "Investor",
                "The ROI on the properties ZenithHomes suggested has been outstanding. Highly recommended.",
                &format!("{UNSPLASH}/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=200&q=80"),
            ),
        ],
    }
}

fn pixel_seed() -> Seed {
    Seed {
        projects: vec![
            project(
                "1",
                "Consultation",
                "Expert real estate consultation for modern homes.",
                "https://picsum.photos/400/300?random=1",
            ),
            project(
                "2",
                "Modern Design",
                "Architecture planning and interior design services.",
                "https://picsum.photos/400/300?random=2",
            ),
            project(
                "3",
                "Marketing & Sales",
                "Strategic marketing to sell your property faster.",
                "https://picsum.photos/400/300?random=3",
            ),
            project(
                "4",
                "Estate Planning",
                "Comprehensive estate planning and management.",
                "https://picsum.photos/400/300?random=4",
            ),
        ],
        clients: vec![
            client(
                "1",
                "Rowhan Smith",
                "CEO, Foreclosure",
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor.",
                "https://picsum.photos/100/100?random=10",
            ),
            client(
                "2",
                "Shipra Kayak",
                "Brand Designer",
                "Incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam.",
                "https://picsum.photos/100/100?random=11",
            ),
            client(
                "3",
                "John Lepore",
                "CEO, Foreclosure",
                "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
                "https://picsum.photos/100/100?random=12",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        for brand in [Brand::Zenith, Brand::Pixel] {
            let seed = brand.seed();
            assert_eq!(seed.projects.len(), 4);
            assert_eq!(seed.clients.len(), 3);

            let mut ids: Vec<&str> = seed.projects.iter().map(|p| p.id.as_str()).collect();
            ids.dedup();
            assert_eq!(ids.len(), 4);
        }
    }

    #[test]
    fn test_brand_names() {
        assert_eq!(Brand::Zenith.initial(), 'Z');
        assert_eq!(Brand::Pixel.admin_title(), "PixelAdmin");
        assert_eq!(Brand::default().default_namespace(), "zenith");
    }
}
