//! Canonical joke content bundled with the binary.

pub(crate) const BUILTIN_JOKES: &[(&str, &[(&str, &str)])] = &[
    (
        "en",
        &[
            (
                "Why don't scientists trust atoms? Because they make up everything!",
                "Science",
            ),
            (
                "Why did the scarecrow win an award? Because he was outstanding in his field!",
                "Puns",
            ),
            (
                "I told my wife she was drawing her eyebrows too high. She looked surprised.",
                "Relationship",
            ),
            (
                "Why don't eggs tell jokes? They'd crack each other up!",
                "Food",
            ),
            (
                "What do you call a bear with no teeth? A gummy bear!",
                "Animals",
            ),
            (
                "Why did the coffee file a police report? It got mugged!",
                "Food",
            ),
        ],
    ),
    (
        "es",
        &[
            (
                "¿Por qué los pájaros no usan Facebook? Porque ya tienen Twitter!",
                "Tecnología",
            ),
            (
                "¿Qué le dice un taco al otro taco? ¿Quieres que te envuelva?",
                "Comida",
            ),
            (
                "¿Por qué los peces no pagan impuestos? Porque viven en escuelas!",
                "Animales",
            ),
            (
                "¿Cómo se llama el campeón de buceo japonés? Tokofondo!",
                "Deportes",
            ),
            ("¿Qué hace una abeja en el gimnasio? ¡Zum-ba!", "Ejercicio"),
        ],
    ),
    (
        "fr",
        &[
            (
                "Pourquoi les plongeurs plongent-ils toujours en arrière et jamais en avant? Parce que sinon, ils tombent dans le bateau!",
                "Sports",
            ),
            (
                "Que dit un escargot quand il croise une limace? 'Regarde, un nudiste!'",
                "Animaux",
            ),
            (
                "Pourquoi les poissons n'aiment pas jouer au tennis? Parce qu'ils ont peur du filet!",
                "Sports",
            ),
            (
                "Comment appelle-t-on un chat tombé dans un pot de peinture le jour de Noël? Un chat-mallow!",
                "Animaux",
            ),
            ("Que dit un café qui voit un thé? Théière moi!", "Nourriture"),
        ],
    ),
    (
        "de",
        &[
            (
                "Warum nehmen Seeräuber keinen Kreisumfang? Weil sie Pi raten!",
                "Mathematik",
            ),
            ("Was ist grün und klopft an der Tür? Ein Klopfsalat!", "Essen"),
            (
                "Warum können Geister so schlecht lügen? Weil man durch sie hindurchsehen kann!",
                "Übernatürlich",
            ),
            (
                "Was ist weiß und kann nicht durch die Tür? Eine Milch, die den Schlüssel vergessen hat!",
                "Absurd",
            ),
            (
                "Wie nennt man einen Keks unter einem Baum? Ein schattiges Plätzchen!",
                "Wortspiel",
            ),
        ],
    ),
    (
        "it",
        &[
            (
                "Perché i pesci non giocano a calcio? Perché hanno paura della rete!",
                "Sport",
            ),
            ("Cosa fa un gallo in chiesa? Il chicchirichè!", "Animali"),
            (
                "Perché i matematici confondono Halloween e Natale? Perché Oct 31 = Dec 25!",
                "Matematica",
            ),
            ("Come si chiama un pesce senza occhi? Pesce CECO!", "Animali"),
            (
                "Cosa dice un muro a un altro muro? Ci vediamo all'angolo!",
                "Architettura",
            ),
        ],
    ),
];
