//! Static route enumeration for site generation

use crate::application::tags::TagIndex;
use crate::infrastructure::ContentRepository;
use serde::Serialize;
use std::fmt;

/// A page a static build has to produce
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Category {
        category: String,
    },
    Region {
        category: String,
        region: String,
    },
    City {
        category: String,
        region: String,
        city: String,
    },
    Listing {
        category: String,
        region: String,
        city: String,
        listing: String,
    },
    Tag {
        tag: String,
    },
}

impl Route {
    /// Raw URL path segments, before encoding
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Route::Category { category } => vec![category.as_str()],
            Route::Region { category, region } => vec![category.as_str(), region.as_str()],
            Route::City {
                category,
                region,
                city,
            } => vec![category.as_str(), region.as_str(), city.as_str()],
            Route::Listing {
                category,
                region,
                city,
                listing,
            } => vec![
                category.as_str(),
                region.as_str(),
                city.as_str(),
                listing.as_str(),
            ],
            Route::Tag { tag } => vec!["tags", tag.as_str()],
        }
    }
}

/// URL path; each segment is percent-encoded, so a tag holding `/` or a
/// space is still one segment
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "/{}", urlencoding::encode(segment))?;
        }
        Ok(())
    }
}

/// Walks the taxonomy through the hierarchical accessors
pub struct StaticRoutes<'a, R> {
    repository: &'a R,
}

impl<'a, R: ContentRepository> StaticRoutes<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        StaticRoutes { repository }
    }

    /// Category, region, city and listing routes, parents before children
    pub fn taxonomy(&self) -> Vec<Route> {
        let mut routes = Vec::new();

        for category in self.repository.categories() {
            routes.push(Route::Category {
                category: category.clone(),
            });

            for region in self.repository.regions(&category) {
                routes.push(Route::Region {
                    category: category.clone(),
                    region: region.clone(),
                });

                for city in self.repository.cities(&category, &region) {
                    routes.push(Route::City {
                        category: category.clone(),
                        region: region.clone(),
                        city: city.clone(),
                    });

                    for listing in self.repository.listing_ids(&category, &region, &city) {
                        routes.push(Route::Listing {
                            category: category.clone(),
                            region: region.clone(),
                            city: city.clone(),
                            listing,
                        });
                    }
                }
            }
        }

        routes
    }

    /// One route per distinct tag, sorted
    pub fn tags(&self) -> Vec<Route> {
        TagIndex::build(self.repository)
            .into_keys()
            .map(|tag| Route::Tag { tag })
            .collect()
    }

    pub fn all(&self) -> Vec<Route> {
        let mut routes = self.taxonomy();
        routes.extend(self.tags());
        routes
    }
}
