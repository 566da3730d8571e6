//! Sample records loaded into every freshly built store.

use crate::domain::{CreateProduct, CreateUser};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            name: "Laptop".to_string(),
            description: "High-performance laptop for work and gaming".to_string(),
            price: 999.99,
            category: "Electronics".to_string(),
            tags: tags(&["computer", "portable", "gaming"]),
            in_stock: true,
        },
        CreateProduct {
            name: "Coffee Mug".to_string(),
            description: "Ceramic coffee mug with ergonomic handle".to_string(),
            price: 12.99,
            category: "Kitchen".to_string(),
            tags: tags(&["coffee", "ceramic", "drinkware"]),
            in_stock: true,
        },
        CreateProduct {
            name: "Running Shoes".to_string(),
            description: "Lightweight running shoes for daily training".to_string(),
            price: 89.99,
            category: "Sports".to_string(),
            tags: tags(&["shoes", "running", "fitness"]),
            in_stock: false,
        },
    ]
}

pub fn sample_users() -> Vec<CreateUser> {
    vec![
        CreateUser {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password: "password123".to_string(),
        },
        CreateUser {
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            password: "securepass456".to_string(),
        },
        CreateUser {
            name: "Bob Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            password: "mypassword789".to_string(),
        },
    ]
}
