use std::collections::HashMap;

use crate::modules::rto::models::Jurisdiction;

/// Resolves a city name to the name of the state it registers vehicles in
pub trait StateLocator: Send + Sync {
    fn state_for_city(&self, city: &str) -> Option<&'static str>;
}

/// Static directory of the cities the site publishes price pages for
#[derive(Debug, Clone)]
pub struct CityDirectory {
    cities: HashMap<String, &'static str>,
}

const CITIES: &[(&str, &str)] = &[
    ("visakhapatnam", "Andhra Pradesh"),
    ("vijayawada", "Andhra Pradesh"),
    ("guntur", "Andhra Pradesh"),
    ("tirupati", "Andhra Pradesh"),
    ("itanagar", "Arunachal Pradesh"),
    ("guwahati", "Assam"),
    ("dibrugarh", "Assam"),
    ("patna", "Bihar"),
    ("gaya", "Bihar"),
    ("chandigarh", "Chandigarh"),
    ("raipur", "Chhattisgarh"),
    ("bilaspur", "Chhattisgarh"),
    ("delhi", "Delhi"),
    ("new delhi", "Delhi"),
    ("panaji", "Goa"),
    ("margao", "Goa"),
    ("ahmedabad", "Gujarat"),
    ("surat", "Gujarat"),
    ("vadodara", "Gujarat"),
    ("rajkot", "Gujarat"),
    ("gurugram", "Haryana"),
    ("gurgaon", "Haryana"),
    ("faridabad", "Haryana"),
    ("panipat", "Haryana"),
    ("shimla", "Himachal Pradesh"),
    ("dharamshala", "Himachal Pradesh"),
    ("srinagar", "Jammu and Kashmir"),
    ("jammu", "Jammu and Kashmir"),
    ("ranchi", "Jharkhand"),
    ("jamshedpur", "Jharkhand"),
    ("bengaluru", "Karnataka"),
    ("bangalore", "Karnataka"),
    ("mysuru", "Karnataka"),
    ("mysore", "Karnataka"),
    ("mangaluru", "Karnataka"),
    ("hubli", "Karnataka"),
    ("kochi", "Kerala"),
    ("cochin", "Kerala"),
    ("thiruvananthapuram", "Kerala"),
    ("kozhikode", "Kerala"),
    ("bhopal", "Madhya Pradesh"),
    ("indore", "Madhya Pradesh"),
    ("jabalpur", "Madhya Pradesh"),
    ("gwalior", "Madhya Pradesh"),
    ("mumbai", "Maharashtra"),
    ("pune", "Maharashtra"),
    ("nagpur", "Maharashtra"),
    ("nashik", "Maharashtra"),
    ("thane", "Maharashtra"),
    ("navi mumbai", "Maharashtra"),
    ("aurangabad", "Maharashtra"),
    ("imphal", "Manipur"),
    ("shillong", "Meghalaya"),
    ("aizawl", "Mizoram"),
    ("kohima", "Nagaland"),
    ("dimapur", "Nagaland"),
    ("bhubaneswar", "Odisha"),
    ("cuttack", "Odisha"),
    ("puducherry", "Puducherry"),
    ("pondicherry", "Puducherry"),
    ("ludhiana", "Punjab"),
    ("amritsar", "Punjab"),
    ("jalandhar", "Punjab"),
    ("mohali", "Punjab"),
    ("jaipur", "Rajasthan"),
    ("jodhpur", "Rajasthan"),
    ("udaipur", "Rajasthan"),
    ("kota", "Rajasthan"),
    ("gangtok", "Sikkim"),
    ("chennai", "Tamil Nadu"),
    ("coimbatore", "Tamil Nadu"),
    ("madurai", "Tamil Nadu"),
    ("tiruchirappalli", "Tamil Nadu"),
    ("salem", "Tamil Nadu"),
    ("hyderabad", "Telangana"),
    ("secunderabad", "Telangana"),
    ("warangal", "Telangana"),
    ("agartala", "Tripura"),
    ("lucknow", "Uttar Pradesh"),
    ("noida", "Uttar Pradesh"),
    ("ghaziabad", "Uttar Pradesh"),
    ("kanpur", "Uttar Pradesh"),
    ("varanasi", "Uttar Pradesh"),
    ("agra", "Uttar Pradesh"),
    ("dehradun", "Uttarakhand"),
    ("haridwar", "Uttarakhand"),
    ("haldwani", "Uttarakhand"),
    ("kolkata", "West Bengal"),
    ("howrah", "West Bengal"),
    ("siliguri", "West Bengal"),
    ("durgapur", "West Bengal"),
];

impl CityDirectory {
    pub fn new() -> Self {
        Self::from_entries(CITIES)
    }

    pub fn from_entries(entries: &[(&str, &'static str)]) -> Self {
        let cities = entries
            .iter()
            .map(|(city, state)| (Jurisdiction::normalize_key(city), *state))
            .collect();

        Self { cities }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateLocator for CityDirectory {
    fn state_for_city(&self, city: &str) -> Option<&'static str> {
        self.cities.get(&Jurisdiction::normalize_key(city)).copied()
    }
}
