//! "Acerca de" section. Static copy.

const ABOUT_CARDS: [(&str, &str, [&str; 4]); 4] = [
    (
        "favorite",
        "Pasiones",
        [
            "Crear soluciones tecnológicas que impacten positivamente en la vida de las personas",
            "Aprender constantemente nuevas tecnologías y metodologías de desarrollo",
            "Colaborar en proyectos de código abierto y contribuir a la comunidad",
            "Diseñar interfaces intuitivas que mejoren la experiencia del usuario",
        ],
    ),
    (
        "music_note",
        "Música",
        [
            "La música electrónica me ayuda a concentrarme durante largas sesiones de código",
            "Disfruto del jazz mientras diseño interfaces y planifico arquitecturas",
            "El rock clásico es mi compañero en sesiones de debugging intensivas",
            "Descubrir nuevos artistas y géneros musicales constantemente",
        ],
    ),
    (
        "interests",
        "Hobbies",
        [
            "Fotografía digital y edición de imágenes en mis tiempos libres",
            "Practicar senderismo y explorar nuevos lugares naturales",
            "Leer sobre filosofía, ciencia ficción y desarrollo personal",
            "Experimentar con nuevas recetas de cocina internacional",
        ],
    ),
    (
        "lightbulb",
        "Intereses",
        [
            "Inteligencia artificial y machine learning aplicado al desarrollo web",
            "Arquitecturas de software escalables y patrones de diseño",
            "Metodologías ágiles y mejores prácticas de desarrollo en equipo",
            "Accesibilidad web y diseño inclusivo para todos los usuarios",
        ],
    ),
];

pub fn render() -> String {
    let mut html = String::from(
        "<div class=\"container\"><h2 class=\"section-title\">Acerca de Mí</h2>\
         <p class=\"section-subtitle\">Conoce más sobre mis pasiones, intereses y lo que me inspira</p>\
         <div class=\"about-blocks\">",
    );
    for (icon, title, items) in ABOUT_CARDS.iter() {
        html.push_str(&format!(
            "<div class=\"about-card\"><div class=\"about-card-header\"><span class=\"material-icons\">{}</span><h3>{}</h3></div><ul class=\"about-list\">",
            icon, title
        ));
        for item in items {
            html.push_str(&format!("<li>{}</li>", item));
        }
        html.push_str("</ul></div>");
    }
    html.push_str("</div></div>");
    html
}
