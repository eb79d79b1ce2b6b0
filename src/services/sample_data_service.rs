//! Seed data for a fresh marketplace database
//!
//! Generates a full set of agents, packages and home-screen ribbons from a
//! seed, so the same seed always yields the same ids, prices and
//! subscriptions. Only `created_at` follows the wall clock.
//!
//! ## Contents
//! - 50 travel agents and 50 transport agents; every 5th agent is subscribed
//! - Two geo-located destination packages per travel agent
//! - An airport transfer and an inter-city package per transport agent
//! - Two reference Goa packages owned by the first travel agent
//! - Filter, recommendation and explore ribbons

use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::json;
use uuid::Builder;

use crate::models::{
    agent::{Agent, AgentType},
    package::Package,
    ribbon::{RibbonContent, RibbonType},
};
use crate::services::duration_parser::parse_duration_days;

pub const AGENTS_PER_TYPE: usize = 50;
pub const SPONSORED_DISCOUNT_PERCENTAGE: f64 = 15.0;
const SUBSCRIPTION_INTERVAL: usize = 5;

const PLACEHOLDER_IMAGE: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD/2wBDAAYEBQYFBAYGBQYHBwYIChAKCgkJChQODwwQFxQYGBcUFhYaHSUfGhsjHBYWICwgIyYnKSopGR8tMC0oMCUoKSj/2wBDAQcHBwoIChMKChMoGhYaKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCgoKCj/wAARCAABAAEDASIAAhEBAxEB/8QAFQABAQAAAAAAAAAAAAAAAAAAAAv/xAAUEAEAAAAAAAAAAAAAAAAAAAAA/8QAFQEBAQAAAAAAAAAAAAAAAAAAAAX/xAAUEQEAAAAAAAAAAAAAAAAAAAAA/9oADAMBAAIRAxEAPwCdABmX/9k=";

const TRAVEL_AGENT_NAMES: [&str; AGENTS_PER_TYPE] = [
    "Adventure Tours India", "Royal Rajasthan Tours", "Himalayan Trekking Co",
    "Kerala Backwaters Experience", "Desert Safari Adventures", "Golden Triangle Expeditions",
    "Goa Beach Holidays", "Wildlife Safari Tours", "Mountain View Travels",
    "Cultural Heritage Tours", "Spice Route Adventures", "Tiger Trail Expeditions",
    "Coastal Paradise Tours", "Historic India Journeys", "Scenic Valley Tours",
    "Temple Trail Adventures", "Exotic India Travels", "Monsoon Escapes",
    "Yoga Retreat Tours", "Festival Tours India", "Luxury Palace Tours",
    "Budget Backpacker Trips", "Family Fun Adventures", "Romantic Getaways",
    "Corporate Travel Solutions", "Pilgrimage Tours India", "Photography Expeditions",
    "Culinary Tours India", "Ayurveda Wellness Tours", "Bollywood Theme Tours",
    "River Rafting Adventures", "Rock Climbing Expeditions", "Bird Watching Tours",
    "Motorcycle Tours India", "Train Journey Specialists", "Village Tourism India",
    "Textile Tours India", "Architecture Tours", "Fort & Palace Tours",
    "Lake District Adventures", "Tea Garden Tours", "Coffee Plantation Visits",
    "Tribal Culture Tours", "Handicraft Tours", "Street Food Adventures",
    "Shopping Tour Specialists", "Language Immersion Tours", "Music & Dance Tours",
    "Spiritual Journey Tours", "Medical Tourism India",
];

const TRANSPORT_AGENT_NAMES: [&str; AGENTS_PER_TYPE] = [
    "Swift Cabs", "City Taxi Services", "Highway Express", "Metro Connect Transport",
    "Premium Car Rentals", "Budget Travel Cars", "Luxury Limousine Service",
    "Airport Shuttle Pro", "Interstate Bus Service", "Local Commute Solutions",
    "Executive Car Service", "Tourist Taxi Network", "Eco-Friendly Rides",
    "24/7 Cab Service", "Corporate Transport Solutions", "Family Travel Cars",
    "Adventure Vehicle Rentals", "Long Distance Cabs", "City Tour Vehicles",
    "Hotel Transfer Service", "Wedding Car Rentals", "Group Travel Solutions",
    "Motorcycle Taxi Service", "Electric Vehicle Cabs", "Vintage Car Rentals",
    "Sports Car Service", "Mini Bus Rentals", "Tempo Traveller Service", "AC Bus Service",
    "Volvo Coach Service", "Deluxe Car Rentals", "Economy Cab Service",
    "Railway Station Pickup", "Bus Terminal Service", "Port Transfer Service",
    "Hospital Transfer Cabs", "Shopping Mall Shuttles", "College Transport Service",
    "Office Commute Solutions", "Weekend Getaway Cars", "Night Cab Service",
    "Ladies Special Cabs", "Senior Citizen Transport", "Wheelchair Accessible Cabs",
    "Pet-Friendly Transport", "Luggage Transport Service", "Moving & Shifting Service",
    "Goods Transport", "Courier & Delivery Service", "Emergency Transport Service",
];

const CITIES: [&str; 25] = [
    "Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata", "Hyderabad", "Pune", "Ahmedabad",
    "Jaipur", "Lucknow", "Nagpur", "Indore", "Bhopal", "Visakhapatnam", "Patna", "Vadodara",
    "Agra", "Varanasi", "Srinagar", "Amritsar", "Coimbatore", "Jodhpur", "Madurai",
    "Chandigarh", "Mysore",
];

const TRAVEL_DESCRIPTIONS: [&str; 8] = [
    "Specializing in adventure and trekking tours across India",
    "Luxury heritage tours with authentic cultural experiences",
    "Budget-friendly backpacking adventures for young travelers",
    "Family-oriented tours with child-friendly activities",
    "Wildlife and nature photography expeditions",
    "Spiritual and pilgrimage journey specialists",
    "Beach and coastal adventure packages",
    "Mountain and hill station retreats",
];

const TRANSPORT_DESCRIPTIONS: [&str; 6] = [
    "Reliable and affordable transportation for all occasions",
    "Premium car rental service with professional drivers",
    "24/7 taxi service covering the entire city",
    "Comfortable long-distance travel solutions",
    "Airport and railway station transfer specialists",
    "Interstate and intercity travel experts",
];

const TRAVEL_SERVICES: [[&str; 4]; 4] = [
    ["Package Tours", "Hotel Booking", "Transport", "Guide Service"],
    ["Heritage Tours", "Palace Hotels", "Cultural Shows", "Luxury Travel"],
    ["Trekking", "Adventure Sports", "Camping", "Photography"],
    ["Beach Activities", "Water Sports", "Island Hopping", "Sunset Tours"],
];

const TRANSPORT_SERVICES: [[&str; 4]; 3] = [
    ["City Rides", "Airport Transfer", "Outstation", "Rental Cars"],
    ["Long Distance", "Interstate", "Highway Travel", "Comfortable Journey"],
    ["Group Travel", "Large Vehicles", "Event Transport", "Multiple Passengers"],
];

struct Destination {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    theme: &'static str,
    base_price: f64,
    base_days: u32,
}

const DESTINATIONS: [Destination; 12] = [
    Destination {
        name: "Goa",
        latitude: 15.2993,
        longitude: 74.1240,
        theme: "Beach Escape",
        base_price: 9000.0,
        base_days: 3,
    },
    Destination {
        name: "Jaipur",
        latitude: 26.9124,
        longitude: 75.7873,
        theme: "Royal Heritage",
        base_price: 12000.0,
        base_days: 3,
    },
    Destination {
        name: "Kerala",
        latitude: 9.9312,
        longitude: 76.2673,
        theme: "Backwater Cruise",
        base_price: 15000.0,
        base_days: 4,
    },
    Destination {
        name: "Shimla - Manali",
        latitude: 31.1048,
        longitude: 77.1734,
        theme: "Adventure Trek",
        base_price: 15000.0,
        base_days: 5,
    },
    Destination {
        name: "Udaipur",
        latitude: 24.5854,
        longitude: 73.7125,
        theme: "Lake Palace Stay",
        base_price: 14000.0,
        base_days: 3,
    },
    Destination {
        name: "Rishikesh",
        latitude: 30.0869,
        longitude: 78.2676,
        theme: "Yoga Retreat",
        base_price: 8000.0,
        base_days: 2,
    },
    Destination {
        name: "Darjeeling",
        latitude: 27.0360,
        longitude: 88.2627,
        theme: "Tea Garden Trail",
        base_price: 11000.0,
        base_days: 4,
    },
    Destination {
        name: "Varanasi",
        latitude: 25.3176,
        longitude: 82.9739,
        theme: "Spiritual Journey",
        base_price: 7000.0,
        base_days: 2,
    },
    Destination {
        name: "Agra",
        latitude: 27.1767,
        longitude: 78.0081,
        theme: "Taj Mahal Tour",
        base_price: 6000.0,
        base_days: 1,
    },
    Destination {
        name: "Ladakh",
        latitude: 34.1526,
        longitude: 77.5771,
        theme: "High Pass Expedition",
        base_price: 30000.0,
        base_days: 7,
    },
    Destination {
        name: "Andaman",
        latitude: 11.6234,
        longitude: 92.7265,
        theme: "Island Hopping",
        base_price: 28000.0,
        base_days: 5,
    },
    Destination {
        name: "Mysore",
        latitude: 12.2958,
        longitude: 76.6394,
        theme: "Palace and Gardens",
        base_price: 7500.0,
        base_days: 2,
    },
];

const GOA: &Destination = &DESTINATIONS[0];

pub struct SampleData {
    pub agents: Vec<Agent>,
    pub packages: Vec<Package>,
    pub ribbons: Vec<RibbonContent>,
}

/// Generate the marketplace seed data for `seed`.
pub fn generate_sample_data(seed: u64) -> SampleData {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut agents = Vec::with_capacity(AGENTS_PER_TYPE * 2);
    let mut packages = Vec::new();

    for i in 0..AGENTS_PER_TYPE {
        let agent = travel_agent(&mut rng, i);
        for slot in 0..2 {
            let destination = &DESTINATIONS[(i * 2 + slot) % DESTINATIONS.len()];
            packages.push(destination_package(&mut rng, &agent, destination));
        }
        agents.push(agent);
    }

    for i in 0..AGENTS_PER_TYPE {
        let agent = transport_agent(&mut rng, i);
        packages.extend(transport_packages(&mut rng, &agent));
        agents.push(agent);
    }

    let first_travel = &agents[0];
    packages.push(reference_package(
        &mut rng,
        first_travel,
        "Goa Beach Adventure",
        "Sun, sand and water sports on the beaches of North Goa",
        10000.0,
        "3 days 2 nights",
    ));
    packages.push(reference_package(
        &mut rng,
        first_travel,
        "Goa Heritage Tour",
        "Old Goa churches, spice plantations and Portuguese quarters",
        8000.0,
        "2 days 1 night",
    ));

    for package in packages.iter_mut() {
        let subscribed = agents
            .iter()
            .any(|agent| agent.id == package.agent_id && agent.is_subscribed);
        if subscribed {
            package.sponsor(SPONSORED_DISCOUNT_PERCENTAGE);
        }
    }

    let ribbons = ribbons(&mut rng, &agents);

    SampleData {
        agents,
        packages,
        ribbons,
    }
}

fn seeded_id(rng: &mut StdRng) -> String {
    let bytes: [u8; 16] = rng.gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn email_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "").replace('&', "and")
}

fn is_subscribed(index: usize) -> bool {
    index % SUBSCRIPTION_INTERVAL == SUBSCRIPTION_INTERVAL - 1
}

fn travel_agent(rng: &mut StdRng, i: usize) -> Agent {
    let name = TRAVEL_AGENT_NAMES[i];
    Agent {
        id: seeded_id(rng),
        name: name.to_string(),
        agent_type: AgentType::Travel,
        description: TRAVEL_DESCRIPTIONS[i % TRAVEL_DESCRIPTIONS.len()].to_string(),
        rating: 3.5 + (i % 15) as f32 * 0.1,
        total_bookings: 50 + (i as u32 * 12) % 500,
        location: CITIES[i % CITIES.len()].to_string(),
        contact_phone: format!("+91-9{:03}{:03}{:02}", i, (i * 7) % 1000, (i * 11) % 100),
        contact_email: format!("{}@travel.com", email_slug(name)),
        image_base64: PLACEHOLDER_IMAGE.to_string(),
        services_offered: TRAVEL_SERVICES[i % TRAVEL_SERVICES.len()]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        is_subscribed: is_subscribed(i),
        is_active: true,
        created_at: Utc::now(),
    }
}

fn transport_agent(rng: &mut StdRng, i: usize) -> Agent {
    let name = TRANSPORT_AGENT_NAMES[i];
    Agent {
        id: seeded_id(rng),
        name: name.to_string(),
        agent_type: AgentType::Transport,
        description: TRANSPORT_DESCRIPTIONS[i % TRANSPORT_DESCRIPTIONS.len()].to_string(),
        rating: 3.8 + (i % 12) as f32 * 0.1,
        total_bookings: 25 + (i as u32 * 8) % 300,
        location: CITIES[i % CITIES.len()].to_string(),
        contact_phone: format!("+91-8{:03}{:03}{:02}", i, (i * 5) % 1000, (i * 13) % 100),
        contact_email: format!("{}@transport.com", email_slug(name)),
        image_base64: PLACEHOLDER_IMAGE.to_string(),
        services_offered: TRANSPORT_SERVICES[i % TRANSPORT_SERVICES.len()]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        is_subscribed: is_subscribed(i),
        is_active: true,
        created_at: Utc::now(),
    }
}

struct NewPackage<'a> {
    title: String,
    description: String,
    price: f64,
    duration: String,
    destination: String,
    features: &'a [&'a str],
}

fn package(rng: &mut StdRng, agent: &Agent, fields: NewPackage<'_>) -> Package {
    Package {
        id: seeded_id(rng),
        agent_id: agent.id.clone(),
        title: fields.title,
        description: fields.description,
        price: fields.price,
        duration: fields.duration,
        destination: fields.destination,
        image_base64: PLACEHOLDER_IMAGE.to_string(),
        features: fields.features.iter().map(|f| f.to_string()).collect(),
        duration_days: None,
        latitude: None,
        longitude: None,
        is_sponsored: false,
        original_price: None,
        sponsored_price: None,
        discount_percentage: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

fn nights(days: u32) -> String {
    match days {
        1 => "1 day".to_string(),
        2 => "2 days 1 night".to_string(),
        _ => format!("{} days {} nights", days, days - 1),
    }
}

fn destination_package(rng: &mut StdRng, agent: &Agent, destination: &Destination) -> Package {
    let days = destination.base_days + rng.gen_range(0..=2);
    let price = destination.base_price + rng.gen_range(0..=10) as f64 * 500.0;

    let fields = NewPackage {
        title: format!("{} {}", destination.name, destination.theme),
        description: format!(
            "{}-day {} in {} with {}",
            days,
            destination.theme.to_lowercase(),
            destination.name,
            agent.name
        ),
        price,
        duration: nights(days),
        destination: destination.name.to_string(),
        features: &["Hotel stay", "Breakfast", "Local guide", "Sightseeing"],
    };
    let mut pkg = package(rng, agent, fields);
    pkg.duration_days = Some(days);
    pkg.latitude = Some(destination.latitude);
    pkg.longitude = Some(destination.longitude);
    pkg
}

fn reference_package(
    rng: &mut StdRng,
    agent: &Agent,
    title: &str,
    description: &str,
    price: f64,
    duration: &str,
) -> Package {
    let fields = NewPackage {
        title: title.to_string(),
        description: description.to_string(),
        price,
        duration: duration.to_string(),
        destination: GOA.name.to_string(),
        features: &["Beach resort", "All meals", "Local guide"],
    };
    let mut pkg = package(rng, agent, fields);
    pkg.duration_days = Some(parse_duration_days(duration));
    pkg.latitude = Some(GOA.latitude);
    pkg.longitude = Some(GOA.longitude);
    pkg
}

fn transport_packages(rng: &mut StdRng, agent: &Agent) -> [Package; 2] {
    let transfer_price = 600.0 + rng.gen_range(0..=8) as f64 * 50.0;
    let intercity_price = 2000.0 + rng.gen_range(0..=10) as f64 * 100.0;

    let transfer = package(
        rng,
        agent,
        NewPackage {
            title: "Airport Transfer Service".to_string(),
            description: "Airport pickup and drop with professional drivers".to_string(),
            price: transfer_price,
            duration: "1 way trip".to_string(),
            destination: format!("{} Airport", agent.location),
            features: &["AC car", "Professional driver", "24/7 availability", "Toll included"],
        },
    );
    let intercity = package(
        rng,
        agent,
        NewPackage {
            title: "Inter-city Travel Package".to_string(),
            description: "Inter-city travel with multiple stops and flexible timing".to_string(),
            price: intercity_price,
            duration: "Per day".to_string(),
            destination: "Multiple cities".to_string(),
            features: &[
                "Experienced driver",
                "Fuel included",
                "Multiple stops",
                "Flexible schedule",
            ],
        },
    );

    [transfer, intercity]
}

fn ribbons(rng: &mut StdRng, agents: &[Agent]) -> Vec<RibbonContent> {
    let recommended: Vec<serde_json::Value> = agents
        .iter()
        .filter(|agent| agent.agent_type == AgentType::Travel)
        .take(2)
        .zip(["Based on your adventure preferences", "Highly rated in your area"])
        .map(|(agent, reason)| json!({ "agent_id": agent.id, "reason": reason }))
        .collect();

    vec![
        RibbonContent {
            id: seeded_id(rng),
            title: "Filter Options".to_string(),
            ribbon_type: RibbonType::Filter,
            items: vec![
                json!({ "name": "Travel Agents", "value": "travel", "icon": "🏔️" }),
                json!({ "name": "Transport", "value": "transport", "icon": "🚗" }),
                json!({ "name": "Sponsored", "value": "sponsored", "icon": "⭐" }),
                json!({ "name": "Adventure", "value": "adventure", "icon": "🏃" }),
                json!({ "name": "Heritage", "value": "heritage", "icon": "🏛️" }),
            ],
            order: 1,
            is_active: true,
        },
        RibbonContent {
            id: seeded_id(rng),
            title: "Recommended For You".to_string(),
            ribbon_type: RibbonType::Recommendation,
            items: recommended,
            order: 2,
            is_active: true,
        },
        RibbonContent {
            id: seeded_id(rng),
            title: "Explore More".to_string(),
            ribbon_type: RibbonType::Explore,
            items: vec![
                json!({ "category": "Budget Travel", "action": "budget_travel", "image": "💰" }),
                json!({ "category": "Weekend Getaways", "count": 25, "image": "🏖️" }),
                json!({ "category": "Adventure Sports", "count": 15, "image": "🏔️" }),
                json!({ "category": "Cultural Tours", "count": 30, "image": "🏛️" }),
            ],
            order: 3,
            is_active: true,
        },
    ]
}
