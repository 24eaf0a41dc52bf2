use super::{MenuItem, Money, RestaurantMenu};

const fn item(id: &'static str, name: &'static str, cents: u64) -> MenuItem {
    MenuItem {
        id,
        name,
        price: Money::from_cents(cents),
    }
}

static AMERICA_CAFE: [MenuItem; 10] = [
    item("america-cafe-1", "Chicken Wings", 850),
    item("america-cafe-2", "Mozzarella Sticks", 725),
    item("america-cafe-3", "Loaded Nachos", 975),
    item("america-cafe-4", "Chicken Avocado Club Sandwich", 1250),
    item("america-cafe-5", "Cheeseburger & Fries", 1425),
    item("america-cafe-6", "Grilled Salmon Plate", 1850),
    item("america-cafe-7", "Lemonade", 350),
    item("america-cafe-8", "Iced Tea", 325),
    item("america-cafe-9", "New Orleans Beignets", 675),
    item("america-cafe-10", "Apple Pie", 550),
];

static ITALIAN_TRATTORIA: [MenuItem; 10] = [
    item("italian-trattoria-1", "Garlic Bread", 550),
    item("italian-trattoria-2", "Bruschetta", 725),
    item("italian-trattoria-3", "Caprese Salad", 875),
    item("italian-trattoria-4", "Margherita Pizza", 1350),
    item("italian-trattoria-5", "Fettuccine Alfredo", 1525),
    item("italian-trattoria-6", "Chicken Parmesan", 1750),
    item("italian-trattoria-7", "Italian Soda", 425),
    item("italian-trattoria-8", "Sparkling Water", 375),
    item("italian-trattoria-9", "Tiramisu", 750),
    item("italian-trattoria-10", "Cannoli", 625),
];

static MEXICAN_CANTINA: [MenuItem; 10] = [
    item("mexican-cantina-1", "Guacamole & Chips", 650),
    item("mexican-cantina-2", "Queso Dip", 575),
    item("mexican-cantina-3", "Carne Asada Tacos", 1125),
    item("mexican-cantina-4", "Chicken Enchiladas", 1250),
    item("mexican-cantina-5", "Burrito Bowl", 1375),
    item("mexican-cantina-6", "Quesadilla Grande", 1050),
    item("mexican-cantina-7", "Horchata", 375),
    item("mexican-cantina-8", "Jarritos Soda", 325),
    item("mexican-cantina-9", "Churros", 550),
    item("mexican-cantina-10", "Flan", 625),
];

static CHINESE_KITCHEN: [MenuItem; 10] = [
    item("chinese-kitchen-1", "Spring Rolls", 525),
    item("chinese-kitchen-2", "Pork Dumplings", 650),
    item("chinese-kitchen-3", "Egg Rolls", 575),
    item("chinese-kitchen-4", "Veggie Fried Rice", 950),
    item("chinese-kitchen-5", "Chicken & Broccoli", 1125),
    item("chinese-kitchen-6", "Sweet & Sour Pork", 1250),
    item("chinese-kitchen-7", "Jasmine Tea", 275),
    item("chinese-kitchen-8", "Bubble Tea", 450),
    item("chinese-kitchen-9", "Fortune Cookies", 225),
    item("chinese-kitchen-10", "Sesame Balls", 550),
];

static THAI_KITCHEN: [MenuItem; 10] = [
    item("thai-kitchen-1", "Spring Rolls", 575),
    item("thai-kitchen-2", "Satay Skewers", 750),
    item("thai-kitchen-3", "Pad Thai", 1175),
    item("thai-kitchen-4", "Green Curry", 1250),
    item("thai-kitchen-5", "Drunken Noodles", 1325),
    item("thai-kitchen-6", "Jasmine Rice Bowl", 850),
    item("thai-kitchen-7", "Thai Iced Tea", 425),
    item("thai-kitchen-8", "Coconut Water", 375),
    item("thai-kitchen-9", "Mango Sticky Rice", 750),
    item("thai-kitchen-10", "Fried Banana", 525),
];

static JAPANESE_GRILL: [MenuItem; 10] = [
    item("japanese-grill-1", "Edamame", 450),
    item("japanese-grill-2", "Gyoza", 675),
    item("japanese-grill-3", "Miso Soup", 350),
    item("japanese-grill-4", "Teriyaki Bowl", 1150),
    item("japanese-grill-5", "Udon Noodle Soup", 1075),
    item("japanese-grill-6", "Sushi Roll", 1325),
    item("japanese-grill-7", "Green Tea", 275),
    item("japanese-grill-8", "Ramune Soda", 350),
    item("japanese-grill-9", "Mochi Ice Cream", 650),
    item("japanese-grill-10", "Dorayaki", 575),
];

static INDIAN_CANTEEN: [MenuItem; 10] = [
    item("indian-canteen-1", "Samosas", 550),
    item("indian-canteen-2", "Pakoras", 625),
    item("indian-canteen-3", "Chicken Tikka Plate", 1275),
    item("indian-canteen-4", "Butter Chicken", 1350),
    item("indian-canteen-5", "Chana Masala", 1025),
    item("indian-canteen-6", "Biryani Bowl", 1175),
    item("indian-canteen-7", "Mango Lassi", 450),
    item("indian-canteen-8", "Chai Tea", 325),
    item("indian-canteen-9", "Gulab Jamun", 575),
    item("indian-canteen-10", "Kheer", 650),
];

static MEDITERRANEAN_BISTRO: [MenuItem; 10] = [
    item("mediterranean-bistro-1", "Hummus & Pita", 650),
    item("mediterranean-bistro-2", "Stuffed Grape Leaves", 725),
    item("mediterranean-bistro-3", "Greek Salad", 875),
    item("mediterranean-bistro-4", "Chicken Shawarma Plate", 1250),
    item("mediterranean-bistro-5", "Falafel Wrap", 1075),
    item("mediterranean-bistro-6", "Gyro Plate", 1325),
    item("mediterranean-bistro-7", "Mint Lemonade", 375),
    item("mediterranean-bistro-8", "Turkish Coffee", 425),
    item("mediterranean-bistro-9", "Baklava", 675),
    item("mediterranean-bistro-10", "Rice Pudding", 550),
];

static ASIAN_FUSION: [MenuItem; 10] = [
    item("asian-fusion-1", "Spring Rolls", 525),
    item("asian-fusion-2", "Pork Dumplings", 650),
    item("asian-fusion-3", "Egg Rolls", 575),
    item("asian-fusion-4", "Veggie Fried Rice", 950),
    item("asian-fusion-5", "Chicken & Broccoli", 1125),
    item("asian-fusion-6", "Sweet & Sour Pork", 1250),
    item("asian-fusion-7", "Jasmine Tea", 275),
    item("asian-fusion-8", "Bubble Tea", 450),
    item("asian-fusion-9", "Fortune Cookies", 225),
    item("asian-fusion-10", "Sesame Balls", 550),
];

static MENUS: [RestaurantMenu; 9] = [
    RestaurantMenu {
        key: "america-cafe",
        name: "Add Up Café",
        items: &AMERICA_CAFE,
        assignable: true,
    },
    RestaurantMenu {
        key: "italian-trattoria",
        name: "Italian Trattoria",
        items: &ITALIAN_TRATTORIA,
        assignable: true,
    },
    RestaurantMenu {
        key: "mexican-cantina",
        name: "Mexican Cantina",
        items: &MEXICAN_CANTINA,
        assignable: true,
    },
    RestaurantMenu {
        key: "chinese-kitchen",
        name: "Chinese Kitchen",
        items: &CHINESE_KITCHEN,
        assignable: true,
    },
    RestaurantMenu {
        key: "thai-kitchen",
        name: "Thai Kitchen",
        items: &THAI_KITCHEN,
        assignable: true,
    },
    RestaurantMenu {
        key: "japanese-grill",
        name: "Japanese Grill",
        items: &JAPANESE_GRILL,
        assignable: true,
    },
    RestaurantMenu {
        key: "indian-canteen",
        name: "Spice Canteen",
        items: &INDIAN_CANTEEN,
        assignable: true,
    },
    RestaurantMenu {
        key: "mediterranean-bistro",
        name: "Mediterranean Bistro",
        items: &MEDITERRANEAN_BISTRO,
        assignable: true,
    },
    RestaurantMenu {
        key: "asian-fusion",
        name: "Chinese Kitchen",
        items: &ASIAN_FUSION,
        assignable: false,
    },
];

pub(super) fn all() -> &'static [RestaurantMenu] {
    &MENUS
}
