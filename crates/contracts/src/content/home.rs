use super::{Block, ListItem, THUMBNAILS};

pub(super) static BLOCKS: &[Block] = &[
    Block::Heading2("Transforming Text to Infographic"),
    Block::Paragraph(
        "Hello there! The Ukraine War has been a topic of great interest and concern for many. Because of this I wanted to show the impact that the War has caused the global economy as well as show who is supporting Ukraine's cause currently.",
    ),
    Block::Paragraph("This website has four main points/goals:"),
    Block::Callout(&[
        Block::Paragraph(
            "Purpose: To present a concise, visually-driven summary of how the Ukraine War has affected the global economy and to show which countries and organizations are publicly supporting Ukraine.",
        ),
        Block::Paragraph(
            "Contents: The site includes the final infographic, the original source text and context, a statement of goals and design choices, data visualizations, and a short reflection on the design process.",
        ),
        Block::Paragraph(
            "Organization: The site is organized into three main pages — Home (overview and outline), Pitching the Infographic (rhetorical choices and pitch), and Researching & Brainstorming (notes, sources, and sample visuals). Each page groups related content and provides navigation to the other sections.",
        ),
        Block::Paragraph(
            "Key takeaway: After reading, the audience should understand the infographic’s purpose, the main evidence and data that support it, and the intended audience and rhetorical choices behind the visual design.",
        ),
    ]),
    Block::Heading2("Final Infographic:"),
    Block::Paragraph(
        "Here is the result of this project in terms of an infographic. It consists of two different pages. By clicking on either of the two you will be able to see them more clearly.",
    ),
    Block::Gallery(&THUMBNAILS),
    Block::Heading2("Statement of Goals and Choices"),
    Block::Paragraph(
        "Here is an in depth explanation about the thought process behind this infographpic and why certain design choices were made.",
    ),
    Block::Heading3("Project Development "),
    Block::Paragraph(
        "This infographic initially began with a goal to inform readers about the financial and geopolitical aspects of the ongoing war in Ukraine. I was first interested in having a better understanding about how different countries were contributing to Ukraine’s defense and recovery as well as what contributions revealed about different countries priorities and global alliances. My data from the initial research phase was based on primary sources and data reports about the conflict. I realized quickly that a large volume of this would simply overcomplicate the infographic and make it difficult for readers to comprehend it properly. So, I created different graphs to make it less complex and have a much more visually interesting format.",
    ),
    Block::Paragraph(
        "The drafting process meant selecting specific data that I wanted to focus on the most. Things like total aid amounts, different aid amounts, any periodic trends, military vs. nonmilitary support, and aid based on country GDP. Creating a rough sketch of potential layouts through wireframing and testing different visual styles helped refine the design. It helped make the overall infographic clearer and ensure that my what I was emphasizing was my main point of the visual overall. One example of this was making the comparison between European and U.S. aid a little larger overall and giving it its own dedicated graph.",
    ),
    Block::Paragraph(
        "By focusing on improving the flow of the infographic itself and creating a visual hierarchy of some sense I was able to adjust the color schemes. This meant I could differentiate different spots and organize the infographic. By adding subtitles to graphs and adding context I could help better guide the interpretation. Restructuring charts also meant that I could better convey trends in aid. I wanted to guarantee that any viewer, no matter what level of knowledge, could see and understand the main points of the infographic and see the points I’m conveying about aid to Ukraine.",
    ),
    Block::Heading3("Rhetorical Analysis"),
    Block::Paragraph(
        "The underlying argument for this infographic is to inform and have people better recognize the scale and complex ties when it comes to support for Ukraine. The purpose is both informative and persuasive as it’s to show the aid isn’t just a point of generosity (although there is the humanitarian aspect) but also a strategic and political act that reflects a broader geopolitical beliefs and different countries’ alliances and stances. Using an infographic to present the data in a way that can be both easily compelling and understandable.",
    ),
    Block::Paragraph(
        "The main audience is a student, educators, and policy enthusiasts who may not exactly have the time nor the expertise to look through a large report or research paper. Using a visual way to tell a story means the infographic can appeal to a broader audience demographic. The rhetorical situation itself is shaped by the urgency of the topic through things like ongoing war and public debates about foreign aid. Meaning that clarity and credibility are essential.",
    ),
    Block::Heading3("Choosing Content"),
    Block::Paragraph(
        "What to include and what to leave out was a big portion of this infographic assignment. I made it a goal to focus more so on actual aid rather than military strategy or the outcome of different conflicts. While military developments are important they are also much more speculative and even emotionally charged. While financial data is much more outright and understandable, making it easy to assess when looking at an infographic.",
    ),
    Block::Callout(&[
        Block::Heading4("I included:"),
        Block::List {
            ordered: false,
            items: &[
                ListItem::Text("Total aid figures from top donor countries"),
                ListItem::Text("Different monthly aid trends"),
                ListItem::Text("GDP comparisons"),
                ListItem::Text("Military and nonmilitary aid data"),
            ],
        },
        Block::Heading4("I excluded:"),
        Block::List {
            ordered: false,
            items: &[
                ListItem::Text("Specific events"),
                ListItem::Text("Political commentary or opinion"),
                ListItem::Text("Aid from private organizations, or statements"),
            ],
        },
    ]),
    Block::Paragraph(
        "These exclusions were mainly to ensure there was a focus on the numbers aspect and to not dilute the message at all. Including too many opinions or variables could mean confusing an audience that might have less knowledge about strategic analysis or the war itself.",
    ),
    Block::Heading3("Rhetorical Technological Literacy in the Design Process"),
    Block::Paragraph(
        "Creating the infographic meant requiring a combination of both rhetorical awareness and technological literacy. Using Adobe Express I was able to adjust the visual elements and guaranteed that each chart and graph had a rhetorical purpose. One example for the graph comparing European and U.S. aid, it was designed with bold labels and contrasting colors to make it more apparent. As a rhetorical strategy to highlight a turning point in global support.",
    ),
    Block::Paragraph(
        "I also applied different principles of visual rhetoric through this infographic. Including proximity, alignment, and contrast, as well as grouping. This helped establish more thematic connections between different sections while also ensuring that the infographic was well organized. Adding text boxes sparingly to give data and context also helped keep visuals from being overwhelming.",
    ),
    Block::Paragraph(
        "Technological literacy was also necessary for this infographic, mainly with the role of data sourcing and verification. Using reliable databases and cross referencing figures meant I could ensure their accuracy and make the infographic as accurate as possible to the current information. Supporting the infographic’s ethos as it makes it more credible and a trustable source of information for the reader.",
    ),
    Block::Heading3("Examples of Visuals"),
    Block::Paragraph("Example 1: Monthly Aid Trend Chart"),
    Block::Paragraph(
        "This chart showed the fluctuations in government support to Ukraine over the time of conflict. The visual format means viewers can quickly find different trends or even spikes and dips that correlate with major events. This could be like the U.S. government administration changing after the presidential election.",
    ),
    Block::PlainParagraph("Example 2: GDP Based Aid"),
    Block::Paragraph(
        "By using the GDP of respective countries, it allows the challenging goal of understanding just how much aid each country is given to be understood better. It reveals which countries are doing most for a more equitable perspective rather than just straight dollar values.",
    ),
    Block::Paragraph("Example 3: Europe vs. U.S. Aid"),
    Block::Paragraph(
        "This graph shows the change in leadership when it comes to given aid and how Europe is overtaking the U.S. in aid contribution overall. It supports the argument that war has adjusted people’s perspectives and global alliances and how countries feel about their responsibilities. While a visual graph also makes it much more apparent making the infographic more persuasive.",
    ),
    Block::Heading3("Applied Course Concepts"),
    Block::Callout(&[
        Block::Heading4("Applied Course Concepts"),
        Block::Paragraph("Several key concepts came into play when working on this infographic."),
        Block::List {
            ordered: false,
            items: &[
                ListItem::Labeled {
                    label: "Rhetorical Situation:",
                    text: "The necessity to understand the dynamics of purpose, audience, and context, and how it guided the design of the infographic.",
                },
                ListItem::Labeled {
                    label: "Multimodal Composition:",
                    text: "By using an infographic, I showed how visual, textual, and numerical elements can work together.",
                },
                ListItem::Labeled {
                    label: "Ethos, Pathos, Logos:",
                    text: "Although the infographic heavily relies on logos because of all the graphs, it also builds onto ethos through credible sourcing and pathos via the impact of aid.",
                },
                ListItem::Labeled {
                    label: "Revision and Reflection:",
                    text: "Designing this infographic in an iterative manner meant I could do a lot of self-assessing which was important to achieving clarity in the infographic.",
                },
            ],
        },
        Block::Heading3("Final Reflection"),
        Block::Paragraph(
            "This project taught me how to convert complex research into an infographic whose format is both powerful rhetorically and easily accessible. By applying these core concepts, I kept the infographic from being just a summary of data but instead something that informs and persuades readers about the necessity for aid in Ukraine.",
        ),
    ]),
];
