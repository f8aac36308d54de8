//! Built-in catalog loaded before any supplementary data files.

use super::StoreBuilder;

/// `(question, answer, category)`
type Entry = (&'static str, &'static str, &'static str);

const GREETINGS: &[Entry] = &[
    ("hello", "Hello! How can I help you today? I'm your personal search assistant.", "Greetings"),
    ("hi", "Hi there! Welcome to your search app. What would you like to know?", "Greetings"),
    ("hey", "Hey! I'm here to help you find information. What's on your mind?", "Greetings"),
    ("good morning", "Good morning! I hope you're having a great start to your day. How can I assist you?", "Greetings"),
    ("good afternoon", "Good afternoon! I'm ready to help you with your search queries.", "Greetings"),
    ("good evening", "Good evening! I'm here to help you find what you're looking for.", "Greetings"),
    ("good night", "Good night! I hope you had a productive day. Feel free to ask if you need anything.", "Greetings"),
    ("morning", "Good morning! How can I help you today?", "Greetings"),
    ("afternoon", "Good afternoon! What would you like to search for?", "Greetings"),
    ("evening", "Good evening! I'm here to help you.", "Greetings"),
    ("night", "Good night! I hope you had a great day.", "Greetings"),
    ("sup", "Sup! What's up with you? Need help finding something?", "Greetings"),
    ("what's up", "Not much, just here to help you search! What do you need?", "Greetings"),
    ("howdy", "Howdy! I'm your search partner. What can I help you find?", "Greetings"),
    ("yo", "Yo! Ready to help you search. What's the plan?", "Greetings"),
    ("greetings", "Greetings! I'm honored to assist you today. What would you like to know?", "Greetings"),
    ("salutations", "Salutations! I'm here to help you find information. How may I assist?", "Greetings"),
    ("good day", "Good day to you! I'm ready to help with your search needs.", "Greetings"),
];

const COMMON: &[Entry] = &[
    ("how are you", "I'm doing great, thank you for asking! I'm a search assistant, so I'm always ready to help you find information. How about you?", "Personal"),
    ("what's your name", "My name is Search Assistant! I'm here to help you find information quickly and efficiently.", "Personal"),
    ("who are you", "I'm an offline answer desk. I look up common questions in a built-in catalog and any extra data files you drop into the data directory.", "Personal"),
    ("what can you do", "I can answer common questions instantly, suggest questions as you type, and let you step back and forward through the answers you've seen.", "Personal"),
    ("help", "I'm here to help! I can:\n• Answer common questions instantly\n• Suggest matching questions\n• Step back and forward through answers\n\nJust type your question and I'll look it up.", "Help"),
    ("help me", "I'd be happy to help you! What do you need assistance with? I can answer common questions or explain how to use this tool.", "Help"),
    ("i need help", "No worries, I'm here to help! What can I assist you with today? Feel free to ask any question or search for any topic.", "Help"),
    ("can you help", "Absolutely! I'm designed to help you find information quickly and easily. What do you need help with?", "Help"),
    ("how to use", "Using this tool is simple:\n\n1. Type your question at the prompt\n2. Press Enter\n3. The best matching answer is shown first\n4. Related answers follow it\n5. Use :back and :forward to revisit answers\n\nTry asking me something!", "Usage"),
    ("how does this work", "Everything runs offline:\n\n• Your question is matched against a built-in catalog\n• An exact match wins, otherwise the closest substring match\n• Questions containing your text are listed as related answers\n• If nothing matches, part of the catalog is shown instead", "Usage"),
    ("what is this app", "This is an offline question-and-answer tool that offers:\n\n• Instant answers for common questions\n• Suggestions as you type\n• Extra answers loaded from JSON or CSV files\n• Back and forward navigation through answers", "Usage"),
];

const TECHNICAL: &[Entry] = &[
    ("what is ai", "AI (Artificial Intelligence) is technology that enables computers to perform tasks that typically require human intelligence, such as learning, reasoning, problem-solving, and understanding natural language.", "Technology"),
    ("what is machine learning", "Machine Learning is a subset of AI that allows computers to learn and improve from experience without being explicitly programmed. It uses algorithms to identify patterns in data.", "Technology"),
    ("what is programming", "Programming is the process of creating instructions for computers to follow. It involves writing code in programming languages to solve problems and create software applications.", "Technology"),
    ("what is coding", "Coding is the act of writing computer programs using programming languages. It's how we communicate with computers to make them perform specific tasks.", "Technology"),
    ("what is the internet", "The Internet is a global network of connected computers that allows people to share information, communicate, and access resources from anywhere in the world.", "Technology"),
    ("what is a website", "A website is a collection of web pages hosted on the internet that can contain text, images, videos, and other content accessible through a web browser.", "Technology"),
    ("what is a browser", "A web browser is software that allows you to access and view websites on the internet. Examples include Chrome, Firefox, Safari, and Edge.", "Technology"),
    ("what is software", "Software is a set of instructions and data that tell a computer how to perform specific tasks. It includes applications, operating systems, and utilities.", "Technology"),
    ("what is an app", "An app (application) is software designed to perform specific functions for users. Apps can run on computers, smartphones, tablets, and other devices.", "Technology"),
    ("what is an operating system", "An operating system (OS) is software that manages computer hardware and software resources, providing common services for computer programs.", "Technology"),
    ("what is http", "HTTP (Hypertext Transfer Protocol) is an application protocol used for transmitting hypermedia documents, such as HTML.", "Technology"),
    ("what is https", "HTTPS is HTTP over TLS/SSL, providing encryption and authentication for secure communication over networks.", "Technology"),
    ("what is api", "An API (Application Programming Interface) is a set of rules that allow different software entities to communicate.", "Technology"),
    ("what is rest", "REST (Representational State Transfer) is an architectural style for designing networked applications using stateless requests.", "Technology"),
    ("what is graphql", "GraphQL is a query language for APIs that lets clients request exactly the data they need.", "Technology"),
    ("what is database", "A database is an organized collection of structured information, typically stored electronically.", "Technology"),
    ("what is sql", "SQL (Structured Query Language) is used to manage and query data in relational databases.", "Technology"),
    ("what is nosql", "NoSQL databases provide flexible schemas and scale horizontally, suitable for large distributed data.", "Technology"),
    ("what is cloud computing", "Cloud computing is the delivery of computing services over the internet on-demand and pay-as-you-go.", "Technology"),
    ("what is docker", "Docker is a platform to build, ship, and run applications inside lightweight containers.", "Technology"),
    ("what is kubernetes", "Kubernetes is an open-source system for automating deployment, scaling, and management of containerized applications.", "Technology"),
    ("what is version control", "Version control tracks changes to files over time so you can recall specific versions later.", "Technology"),
    ("what is git", "Git is a distributed version control system for tracking changes in source code.", "Technology"),
    ("what is github", "GitHub is a platform for hosting Git repositories with collaboration features like pull requests and issues.", "Technology"),
    ("what is python", "Python is a high-level, interpreted programming language known for readability and rich ecosystem.", "Programming"),
    ("what is javascript", "JavaScript is a versatile language primarily used to create interactive behavior on web pages.", "Programming"),
    ("what is c++", "C++ is a general-purpose programming language with object-oriented and generic programming features.", "Programming"),
    ("what is java", "Java is a class-based, object-oriented programming language designed to have as few implementation dependencies as possible.", "Programming"),
    ("what is html", "HTML (HyperText Markup Language) structures content on the web.", "Web"),
    ("what is css", "CSS (Cascading Style Sheets) describes the presentation of HTML documents.", "Web"),
];

const GENERAL_KNOWLEDGE: &[Entry] = &[
    ("what is gravity", "Gravity is a fundamental force that attracts objects toward each other. On Earth, it pulls everything toward the center of the planet, which is why objects fall when dropped.", "Science"),
    ("what is photosynthesis", "Photosynthesis is the process by which plants convert sunlight, carbon dioxide, and water into glucose and oxygen. It's how plants make their own food.", "Science"),
    ("what is dna", "DNA (Deoxyribonucleic acid) is a molecule that carries genetic information and instructions for the development and functioning of living organisms.", "Science"),
    ("what is the capital of france", "The capital of France is Paris, known as the 'City of Light' and famous for its culture, art, fashion, and landmarks like the Eiffel Tower.", "Geography"),
    ("what is the largest ocean", "The Pacific Ocean is the largest ocean on Earth, covering about 46% of the Earth's water surface and about one-third of its total surface area.", "Geography"),
    ("what is the highest mountain", "Mount Everest is the highest mountain above sea level, with a peak elevation of 29,029 feet (8,848 meters) above sea level.", "Geography"),
    ("who invented the telephone", "Alexander Graham Bell is credited with inventing the first practical telephone in 1876, though there were earlier developments by other inventors.", "History"),
    ("when was world war 2", "World War II lasted from 1939 to 1945, involving most of the world's nations and resulting in significant global changes.", "History"),
    ("who was albert einstein", "Albert Einstein was a German-born theoretical physicist who developed the theory of relativity, one of the two pillars of modern physics. He won the Nobel Prize in Physics in 1921.", "History"),
    ("what is pi", "Pi (π) is a mathematical constant representing the ratio of a circle's circumference to its diameter. Its approximate value is 3.14159, though it's an irrational number with infinite decimal places.", "Math"),
    ("what is the square root", "The square root of a number is a value that, when multiplied by itself, gives the original number. For example, the square root of 16 is 4, because 4 × 4 = 16.", "Math"),
    ("what is multiplication", "Multiplication is a mathematical operation that combines groups of equal size. It's essentially repeated addition. For example, 3 × 4 means adding 3 four times: 3 + 3 + 3 + 3 = 12.", "Math"),
    ("what is a noun", "A noun is a word that names a person, place, thing, or idea. Examples include: person (John), place (Paris), thing (book), idea (freedom).", "Language"),
    ("what is a verb", "A verb is a word that expresses an action, occurrence, or state of being. Examples include: run, jump, think, be, have.", "Language"),
    ("what is an adjective", "An adjective is a word that describes or modifies a noun or pronoun. Examples include: big, red, happy, beautiful, intelligent.", "Language"),
    ("what is exercise", "Exercise is physical activity that improves health, fitness, and overall well-being. It includes activities like walking, running, swimming, and strength training.", "Health"),
    ("what is nutrition", "Nutrition is the science of how food affects the body. It involves understanding the nutrients in food and how they contribute to health and disease prevention.", "Health"),
    ("what is sleep", "Sleep is a natural state of rest for the mind and body, essential for physical and mental health, memory consolidation, and overall well-being.", "Health"),
    ("what is music", "Music is an art form that uses sound and silence organized in time. It can include melody, harmony, rhythm, and timbre to create expressive and meaningful compositions.", "Entertainment"),
    ("what is a movie", "A movie (or film) is a series of moving images shown on a screen, typically with accompanying sound, that tells a story or presents information.", "Entertainment"),
    ("what is art", "Art is the expression or application of human creative skill and imagination, typically in visual form such as painting, sculpture, or other creative works.", "Entertainment"),
    ("what is entrepreneurship", "Entrepreneurship is the process of starting and running a business, taking on financial risks in the hope of profit. Entrepreneurs identify opportunities and create value.", "Business"),
    ("what is marketing", "Marketing is the process of promoting, selling, and distributing products or services. It involves understanding customer needs and creating strategies to meet them.", "Business"),
    ("what is innovation", "Innovation is the process of creating new ideas, methods, or products that provide value. It often involves improving existing solutions or creating entirely new ones.", "Business"),
    ("what is the capital of japan", "Tokyo is the capital of Japan, a bustling metropolis known for its technology and culture.", "Geography"),
    ("what is the capital of india", "New Delhi is the capital of India, serving as the seat of all three branches of the Government of India.", "Geography"),
    ("what is the capital of canada", "Ottawa is the capital of Canada, located in the province of Ontario.", "Geography"),
    ("what is algebra", "Algebra is a branch of mathematics dealing with symbols and the rules for manipulating those symbols.", "Math"),
    ("what is calculus", "Calculus is the mathematical study of continuous change, dealing with derivatives and integrals.", "Math"),
];

/// Insert every built-in entry, in catalog order.
pub fn populate(builder: &mut StoreBuilder) {
    for (question, answer, category) in GREETINGS
        .iter()
        .chain(COMMON)
        .chain(TECHNICAL)
        .chain(GENERAL_KNOWLEDGE)
    {
        builder.add_qa(question, answer, category);
    }
}
