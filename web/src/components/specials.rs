use leptos::prelude::*;

struct Special {
    title: &'static str,
    price: &'static str,
    description: &'static str,
    image: &'static str,
}

static SPECIALS: [Special; 3] = [
    Special {
        title: "Greek Salad",
        price: "$12.99",
        description: "The famous greek salad of crispy lettuce, peppers, olives and our Chicago style feta cheese, garnished with crunchy garlic and rosemary croutons.",
        image: "/images/greek_salad.svg",
    },
    Special {
        title: "Bruschetta",
        price: "$7.99",
        description: "Our Bruschetta is made from grilled bread that has been smeared with garlic and seasoned with salt and olive oil. Topped with fresh vegetables.",
        image: "/images/bruschetta.svg",
    },
    Special {
        title: "Lemon Dessert",
        price: "$5.99",
        description: "This comes straight from grandma's recipe book, every last ingredient has been sourced and is as authentic as can be imagined.",
        image: "/images/lemon_dessert.svg",
    },
];

#[component]
pub fn Specials() -> impl IntoView {
    let cards = SPECIALS
        .iter()
        .map(|item| {
            view! {
                <article class="card">
                    <div class="card-image">
                        <img src={item.image} alt={item.title}/>
                    </div>
                    <div class="card-content">
                        <div class="card-title">
                            <h3>{item.title}</h3>
                            <span class="price">{item.price}</span>
                        </div>
                        <p>{item.description}</p>
                        <a
                            href="#"
                            class="order-delivery"
                            aria-label={format!("Order {} for delivery", item.title)}
                        >
                            "Order a delivery "
                            <i class="fas fa-shopping-cart" aria-hidden="true"></i>
                        </a>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="specials" aria-labelledby="specials-title">
            <div class="container">
                <div class="specials-heading">
                    <h2 class="section-title" id="specials-title">"This Week's Specials"</h2>
                    <span class="btn-disabled" aria-disabled="true">"Online Menu"</span>
                </div>
                <div class="cards">{cards}</div>
            </div>
        </section>
    }
}
