use super::{Block, ListItem};

pub(super) static BLOCKS: &[Block] = &[
    Block::Heading2("Researching & Brainstorming"),
    Block::Paragraph(
        "Researching and brainstorming for this project meant a ton of different raw data. It meant looking at different sources gathering different financial numbers that could help the average person better see the effects of the war and how exactly other countries are currently funding the war.",
    ),
    Block::Paragraph(
        "For this website I had to do a lot more research in terms of creating a website that was easily navigatable. But luckily past experience with code meant I could easily create a website that would work for a project like this. So instead of using Penn State's implementation of WordPress I coded the website myself and am currently hosting it on a free web server.",
    ),
    Block::Heading2("Researching & Brainstorming Outline:"),
    Block::List {
        ordered: true,
        items: &[
            ListItem::Text("Searching for Facts"),
            ListItem::Text("Sorting Out Data"),
            ListItem::Text("Finding Effective Illustrations"),
            ListItem::Text("Creating Sample Visuals"),
            ListItem::Text("Organizing and Improving the Infographic"),
        ],
    },
    Block::Heading2("Searching for Facts"),
    Block::Paragraph(
        "Searching for facts meant using a variety of sources but especially the Kiel Institute. This organization had a ton of data that I was looking for that showed the impact that financial aid had as well as just relative numbers that showed each country's contributions and could link it to things like GDP making them more comparable",
    ),
    Block::Heading2("Sorting Out Data"),
    Block::PlainParagraph(
        "I needed to do a lot of combing through data to find what would be most impactful. After finding reliable sources it was actually quite easy to add things I liked. But limiting the infographic in order to make sure it was well organized and not too cluttered was a difficult task. I had to decide what data would be the most impactful and important to a viewer within my target audience (people who are mainly interested in the Ukraine War but who may not have a lot of knowledge).",
    ),
    Block::Heading2("Finding Effective Illustrations"),
    Block::PlainParagraph(
        "This was also an extremely important area. Effective illustrations meant that a viewer could quickly figure out what my infographic was about. This meant I could hook the viewer much more quickly and get their attention. My first thought was to add bold and large illustrations that weren't overly complex so they didn't outshine the actual data itself so that they only contributed to the overall theme of the infographic.",
    ),
    Block::Heading2("Creating Sample Visuals"),
    Block::PlainParagraph(
        "The goal with this was to ensure that any data I gathered was in an organized graph or visual that made it an effective part of the infographic to the user. With infographics more is less when it comes to words so adding too many might distract the viewer or even make them disinterested.",
    ),
    Block::Heading2("Organizing and Improving the Infographic"),
    Block::PlainParagraph(
        "Once I had all the elements it was time to actually design the infographic and then continue reiterating and improving upon it. This meant starting with a basic outline and boxes of gray that sepearted different visuals and groups of information. From there I began to add an overall theme of blue and yellow (the colors of the Ukrainian Flag) in order to create a more unified theme. After this was done I continued to adjust them in order to make it more effective and more neat.",
    ),
];
